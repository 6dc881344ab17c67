pub const BUFFER_HEIGHT: usize = 25;
pub const BUFFER_WIDTH: usize = 80;

/// Physical base of the VGA text region.
pub const VGA_BASE: usize = 0xb8000;

use volatile::Volatile;

use crate::helper::ColorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii_character: u8,
    pub color_code: ColorCode,
}

/// The 80x25 cell grid, kept flat so that cell index
/// `row * BUFFER_WIDTH + column` matches the hardware byte offset
/// `(row * 80 + column) * 2`. A write past column 79 continues into
/// the next row's cells; there is no wrap and no clipping.
#[repr(transparent)]
pub struct Buffer {
    pub cells: [Volatile<ScreenChar>; BUFFER_WIDTH * BUFFER_HEIGHT],
}

assert_eq_size!(ScreenChar, u16);
assert_eq_size!(Buffer, [u8; BUFFER_WIDTH * BUFFER_HEIGHT * 2]);
