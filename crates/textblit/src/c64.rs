//! Geometry and memory map of the Commodore 64 text screen.

use crate::surface::MappedSurface;

pub const WIDTH: usize = 40;
pub const HEIGHT: usize = 25;

/// Default screen RAM (glyph plane) after reset.
pub const SCREEN_RAM: usize = 0x0400;
/// Color RAM; only the low nibble of each byte is wired up.
pub const COLOR_RAM: usize = 0xD800;

pub const BLACK: u8 = 0;
pub const WHITE: u8 = 1;
pub const RED: u8 = 2;
pub const CYAN: u8 = 3;
pub const PURPLE: u8 = 4;
pub const GREEN: u8 = 5;
pub const BLUE: u8 = 6;
pub const YELLOW: u8 = 7;
pub const ORANGE: u8 = 8;
pub const BROWN: u8 = 9;
pub const LIGHT_RED: u8 = 10;
pub const DARK_GREY: u8 = 11;
pub const GREY: u8 = 12;
pub const LIGHT_GREEN: u8 = 13;
pub const LIGHT_BLUE: u8 = 14;
pub const LIGHT_GREY: u8 = 15;

pub type Screen = MappedSurface<'static, WIDTH, HEIGHT>;

/// The text screen at its power-on location.
///
/// # Safety
///
/// Must only be called on a C64 (or an emulator mapping the same addresses),
/// with the VIC-II still pointed at `SCREEN_RAM`, and at most one `Screen`
/// may be alive at a time.
pub unsafe fn screen() -> Screen {
    // SAFETY: both regions are `WIDTH * HEIGHT` bytes of always-mapped RAM.
    unsafe { MappedSurface::from_raw(SCREEN_RAM as *mut u8, COLOR_RAM as *mut u8) }
}
