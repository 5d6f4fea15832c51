//! Glyph and icon tables for an LED matrix clock.
//!
//! The raw tables live in [`mis_font`] as `static` arrays. [`Icon`] names them, [`MatrixPanel`]
//! draws them on a 16x16 panel made of four cascaded 8x8 modules and turns the result into
//! register writes through [`BLOCK_MAP`].
#![no_std]

pub mod animation;
pub mod block_map;
mod error;
pub mod glyph;
pub mod icon;
pub mod mis_font;
pub mod panel;

pub use animation::{IconAnimation, DEFAULT_FRAME_INTERVAL_MS};
pub use block_map::{block_address, BlockAddress};
pub use error::Error;
pub use glyph::{frame_image, Frame, SignalLevel};
pub use icon::Icon;
pub use mis_font::*;
pub use panel::{ChainWrite, MatrixPanel, PanelConfig, Rotation};
