use core::fmt::Display;

use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor};

use crate::mis_font::IMG_WIFI;

pub const GLYPH_WIDTH: u32 = 8;
pub const GLYPH_ROWS: usize = 8;

/// One 8x8 cell, a byte per row, bit 7 on the left.
pub type Frame = [u8; GLYPH_ROWS];

/// Wraps a frame as a 1bpp image so it can be drawn on any `BinaryColor` target.
pub fn frame_image(frame: &Frame) -> ImageRaw<'_, BinaryColor> {
    ImageRaw::new(frame, GLYPH_WIDTH)
}

pub fn is_lit(frame: &Frame, x: u32, y: u32) -> bool {
    if x >= GLYPH_WIDTH {
        return false;
    }

    match frame.get(y as usize) {
        Some(row) => row & (0x80 >> x) != 0,
        None => false,
    }
}

pub fn lit_count(frame: &Frame) -> u32 {
    frame.iter().map(|row| row.count_ones()).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignalLevel {
    None,
    Low,
    Medium,
    High,
}

impl SignalLevel {
    pub fn from_rssi(dbm: i8) -> Self {
        match dbm {
            -55..=i8::MAX => SignalLevel::High,
            -67..=-56 => SignalLevel::Medium,
            -80..=-68 => SignalLevel::Low,
            _ => SignalLevel::None,
        }
    }

    pub fn frame(self) -> &'static Frame {
        match self {
            SignalLevel::None => &IMG_WIFI[0],
            SignalLevel::Low => &IMG_WIFI[1],
            SignalLevel::Medium => &IMG_WIFI[2],
            SignalLevel::High => &IMG_WIFI[3],
        }
    }
}

impl Display for SignalLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}
