//! Text-mode driver for the memory-mapped VGA buffer at `0xb8000`.
//!
//! One cell of the 80x25 grid is two bytes: the ascii character, then
//! the attribute byte. The [`Writer`] tracks a cursor and a current
//! [`ColorCode`] and stores cells through volatile writes. It does no
//! scrolling, no newline handling and no bounds checking: writing past
//! column 79 continues linearly into the next row's cells.

#![cfg_attr(not(test), no_std)]
#![warn(unused_import_braces)]
#![deny(unused_qualifications, keyword_idents, unused_extern_crates, stable_features)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate static_assertions;

pub mod buffer;
pub mod helper;

use core::fmt;

use spin::Mutex;

use crate::buffer::{Buffer, ScreenChar, BUFFER_WIDTH, VGA_BASE};
use crate::helper::{Color, ColorCode};

pub struct Writer {
    pub row: usize,
    pub column: usize,
    pub color_code: ColorCode,
    pub buffer: &'static mut Buffer,
}

impl Writer {
    /// Cursor at the origin; black on white unless a color is given.
    pub fn new(buffer: &'static mut Buffer, color_code: Option<ColorCode>) -> Writer {
        Writer {
            row: 0,
            column: 0,
            color_code: color_code.unwrap_or(ColorCode::new(Color::Black, Color::White)),
            buffer,
        }
    }

    /// Writer over the hardware region at [`VGA_BASE`].
    ///
    /// The caller asserts that the VGA text region is identity-mapped
    /// and that no other writer aliases it. Call at most once.
    pub unsafe fn vga(color_code: Option<ColorCode>) -> Writer {
        Writer::new(&mut *(VGA_BASE as *mut Buffer), color_code)
    }

    /// Stores `byte` with the current color at the cursor cell, then
    /// advances the column. No wrap: at column 80 the next write lands
    /// in the following row's first cell.
    pub fn write_byte(&mut self, byte: u8) {
        let cell = self.row * BUFFER_WIDTH + self.column;
        let color_code = self.color_code;
        self.buffer.cells[cell].write(ScreenChar {
            ascii_character: byte,
            color_code,
        });
        self.column += 1;
    }

    /// Writes the first `len` bytes of `bytes` in order. A `len`
    /// larger than the slice writes only the bytes that exist.
    pub fn write_string(&mut self, bytes: &[u8], len: usize) {
        for &byte in bytes.iter().take(len) {
            self.write_byte(byte);
        }
    }

    /// Blanks every cell with `' '` and `color_code` (white on white
    /// if absent), in increasing offset order. Leaves the cursor where
    /// it was.
    pub fn fill_screen(&mut self, color_code: Option<ColorCode>) {
        let blank = ScreenChar {
            ascii_character: b' ',
            color_code: color_code.unwrap_or(ColorCode::new(Color::White, Color::White)),
        };
        for cell in self.buffer.cells.iter_mut() {
            cell.write(blank);
        }
    }
}

impl fmt::Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s.as_bytes(), s.len());
        Ok(())
    }
}

lazy_static! {
    pub static ref WRITER: Mutex<Writer> = Mutex::new(unsafe { Writer::vga(None) });
}

/// Clears the screen through the global writer.
pub fn init() {
    WRITER.lock().fill_screen(None);
    debug!("vga text buffer cleared");
}

pub fn print(args: fmt::Arguments) {
    use core::fmt::Write;
    WRITER.lock().write_fmt(args).expect("could not write to vga buffer");
}

pub fn print_colored(args: fmt::Arguments, color_code: ColorCode) {
    use core::fmt::Write;
    let mut w = WRITER.lock();
    let old_color = w.color_code;
    w.color_code = color_code;
    w.write_fmt(args).expect("could not write to vga buffer");
    w.color_code = old_color;
}

#[macro_export]
macro_rules! vga_print {
    ($($arg:tt)*) => {
        $crate::print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! vga_print_colored {
    ($cc:expr, $($arg:tt)*) => {
        $crate::print_colored(format_args!($($arg)*), $cc)
    };
}
