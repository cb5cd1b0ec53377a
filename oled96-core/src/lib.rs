//! Board-agnostic core logic for the oled96 display driver
//!
//! This crate contains everything that does not depend on a concrete bus
//! implementation:
//!
//! - Glyph tables and character lookup (8x8 column-pattern font)
//! - Text-cell geometry for the two display variants
//! - Vertical pixel-doubling for double-height text
//! - The `DisplayBus` trait implemented by bus transports

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bus;
pub mod font;
pub mod geometry;
pub mod scale;

// Re-export key types
pub use bus::DisplayBus;
pub use font::{glyph_for, Glyph, GLYPH_COLS};
pub use geometry::Variant;
pub use scale::{double_height, Half};
