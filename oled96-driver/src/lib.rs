//! SSD1306 text-mode display driver
//!
//! This crate drives the common 128x64 0.96" OLED module as a character
//! display:
//!
//! - `Oled96`: 8 rows x 16 columns, one controller page per text row
//! - `Oled96Double`: 4 rows x 8 columns with vertically doubled glyphs
//! - `I2cDisplayBus`: the two-wire transport over `embedded-hal` I2C
//!
//! Both surfaces share one rendering engine; they differ only in grid
//! geometry and the doubling pass. The glyph tables and transforms live in
//! `oled96-core`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod display;
pub mod i2c;

// Re-export key types
pub use display::{DisplayConfig, Oled96, Oled96Double};
pub use i2c::{I2cDisplayBus, DEFAULT_ADDRESS};
pub use oled96_core::{DisplayBus, Glyph, Half, Variant};
