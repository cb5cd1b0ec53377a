//! Text rendering surfaces
//!
//! One engine drives both character grids; the public types fix the grid
//! geometry and, for the doubled variant, thread the half selector through
//! every glyph-emitting operation.
//!
//! The driver holds no cursor state: positions live in the controller, and
//! every text write re-addresses it through the cursor commands. Writing
//! past the last column of a row is left to the controller's own address
//! wrapping.

use core::fmt::Write as _;

use heapless::String;
use oled96_core::bus::DisplayBus;
use oled96_core::font::{self, Glyph};
use oled96_core::geometry::Variant;
use oled96_core::scale::{double_height, Half};

use crate::command::{cmd, cursor_commands, INIT_SEQUENCE};

/// Driver configuration
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Mount orientation; selects the segment scan direction in [`flip`]
    ///
    /// [`flip`]: Oled96::flip
    pub flipped: bool,
}

/// Shared rendering engine behind both text surfaces
struct TextEngine<B> {
    bus: B,
    variant: Variant,
    config: DisplayConfig,
}

impl<B: DisplayBus> TextEngine<B> {
    fn new(bus: B, variant: Variant, config: DisplayConfig) -> Self {
        Self {
            bus,
            variant,
            config,
        }
    }

    fn init(&mut self) -> Result<(), B::Error> {
        for &opcode in INIT_SEQUENCE {
            self.bus.write_command(opcode)?;
        }
        self.clear()
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), B::Error> {
        for opcode in cursor_commands(self.variant, row, col) {
            self.bus.write_command(opcode)?;
        }
        Ok(())
    }

    /// Emit one glyph at the current cursor
    ///
    /// Each logical glyph column occupies two RAM columns, so every byte is
    /// written twice.
    fn write_glyph(&mut self, glyph: &Glyph, half: Option<Half>) -> Result<(), B::Error> {
        for &column in glyph {
            let column = match half {
                Some(half) => double_height(column, half),
                None => column,
            };
            self.bus.write_data(column)?;
            self.bus.write_data(column)?;
        }
        Ok(())
    }

    fn write_char(&mut self, c: char, half: Option<Half>) -> Result<(), B::Error> {
        self.write_glyph(font::glyph_for(c), half)
    }

    fn write_str(&mut self, text: &str, half: Option<Half>) -> Result<(), B::Error> {
        for c in text.chars() {
            self.write_char(c, half)?;
        }
        Ok(())
    }

    fn write_number(&mut self, value: i32, half: Option<Half>) -> Result<(), B::Error> {
        let mut digits: String<12> = String::new();
        let _ = write!(digits, "{}", value); // i32 always fits
        self.write_str(&digits, half)
    }

    /// Half selector used when blanking cells; a space column doubles to zero
    fn blank_half(&self) -> Option<Half> {
        match self.variant {
            Variant::FullHeight => None,
            Variant::DoubleHeight => Some(Half::Top),
        }
    }

    fn clear(&mut self) -> Result<(), B::Error> {
        // Repaint with the panel off to avoid a visible sweep
        self.bus.write_command(cmd::DISPLAY_OFF)?;
        for row in 0..self.variant.rows() {
            self.set_cursor(row, 0)?;
            for _ in 0..self.variant.cols() {
                self.write_char(' ', self.blank_half())?;
            }
        }
        self.bus.write_command(cmd::DISPLAY_ON)?;
        self.set_cursor(0, 0)
    }

    fn clear_range(&mut self, count: u8) -> Result<(), B::Error> {
        for _ in 0..count {
            self.write_char(' ', self.blank_half())?;
        }
        Ok(())
    }

    fn invert(&mut self) -> Result<(), B::Error> {
        self.bus.write_command(cmd::INVERT_DISPLAY)
    }

    fn normal(&mut self) -> Result<(), B::Error> {
        self.bus.write_command(cmd::NORMAL_DISPLAY)
    }

    fn flip(&mut self) -> Result<(), B::Error> {
        self.bus.write_command(cmd::DISPLAY_OFF)?;
        self.bus.write_command(cmd::COM_SCAN_INC)?;
        let remap = if self.config.flipped {
            cmd::SEG_REMAP
        } else {
            cmd::SEG_REMAP_NORMAL
        };
        self.bus.write_command(remap)?;
        self.bus.write_command(cmd::DISPLAY_ON)
    }

    fn power_on(&mut self) -> Result<(), B::Error> {
        self.bus.write_command(cmd::DISPLAY_ON)
    }

    fn power_off(&mut self) -> Result<(), B::Error> {
        self.bus.write_command(cmd::DISPLAY_OFF)
    }
}

/// Full-height text surface: 8 rows x 16 columns
pub struct Oled96<B> {
    engine: TextEngine<B>,
}

impl<B: DisplayBus> Oled96<B> {
    /// Create a driver with the default configuration
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, DisplayConfig::default())
    }

    pub fn with_config(bus: B, config: DisplayConfig) -> Self {
        Self {
            engine: TextEngine::new(bus, Variant::FullHeight, config),
        }
    }

    /// Send the power-on sequence and blank the screen
    ///
    /// Call once at startup before any other operation.
    pub fn init(&mut self) -> Result<(), B::Error> {
        self.engine.init()
    }

    /// Blank every cell and return the cursor to (0, 0)
    pub fn clear(&mut self) -> Result<(), B::Error> {
        self.engine.clear()
    }

    /// Blank `count` cells starting at the current cursor
    pub fn clear_range(&mut self, count: u8) -> Result<(), B::Error> {
        self.engine.clear_range(count)
    }

    /// Move the text cursor; out-of-range positions clamp to the grid edge
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), B::Error> {
        self.engine.set_cursor(row, col)
    }

    /// Render a string left to right from the current cursor
    ///
    /// Characters outside the font render as a filled box. No line wrap.
    pub fn write_str(&mut self, text: &str) -> Result<(), B::Error> {
        self.engine.write_str(text, None)
    }

    /// Render a number in decimal, with a leading `-` when negative
    pub fn write_number(&mut self, value: i32) -> Result<(), B::Error> {
        self.engine.write_number(value, None)
    }

    /// Render a caller-supplied glyph at the current cursor
    pub fn write_custom_char(&mut self, glyph: &Glyph) -> Result<(), B::Error> {
        self.engine.write_glyph(glyph, None)
    }

    /// Black-on-white rendering
    pub fn invert(&mut self) -> Result<(), B::Error> {
        self.engine.invert()
    }

    /// White-on-black rendering
    pub fn normal(&mut self) -> Result<(), B::Error> {
        self.engine.normal()
    }

    /// Rotate the scan direction for the configured mount orientation
    pub fn flip(&mut self) -> Result<(), B::Error> {
        self.engine.flip()
    }

    pub fn power_on(&mut self) -> Result<(), B::Error> {
        self.engine.power_on()
    }

    pub fn power_off(&mut self) -> Result<(), B::Error> {
        self.engine.power_off()
    }

    /// Send a raw command byte to the controller
    pub fn send_command(&mut self, opcode: u8) -> Result<(), B::Error> {
        self.engine.bus.write_command(opcode)
    }

    /// Send a raw data byte to display RAM
    pub fn send_data(&mut self, byte: u8) -> Result<(), B::Error> {
        self.engine.bus.write_data(byte)
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.engine.bus
    }
}

/// Double-height text surface: 4 rows x 8 columns
///
/// A character spans two controller pages; callers render it in two passes,
/// writing the [`Half::Top`] expansion on one page and [`Half::Bottom`] on
/// the next.
pub struct Oled96Double<B> {
    engine: TextEngine<B>,
}

impl<B: DisplayBus> Oled96Double<B> {
    /// Create a driver with the default configuration
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, DisplayConfig::default())
    }

    pub fn with_config(bus: B, config: DisplayConfig) -> Self {
        Self {
            engine: TextEngine::new(bus, Variant::DoubleHeight, config),
        }
    }

    /// Send the power-on sequence and blank the screen
    pub fn init(&mut self) -> Result<(), B::Error> {
        self.engine.init()
    }

    /// Blank every cell and return the cursor to (0, 0)
    pub fn clear(&mut self) -> Result<(), B::Error> {
        self.engine.clear()
    }

    /// Blank `count` cells starting at the current cursor
    pub fn clear_range(&mut self, count: u8) -> Result<(), B::Error> {
        self.engine.clear_range(count)
    }

    /// Move the text cursor; out-of-range positions clamp to the grid edge
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), B::Error> {
        self.engine.set_cursor(row, col)
    }

    /// Render one half of a string from the current cursor
    pub fn write_str(&mut self, text: &str, half: Half) -> Result<(), B::Error> {
        self.engine.write_str(text, Some(half))
    }

    /// Render one half of a decimal number
    pub fn write_number(&mut self, value: i32, half: Half) -> Result<(), B::Error> {
        self.engine.write_number(value, Some(half))
    }

    /// Render one half of a caller-supplied glyph
    pub fn write_custom_char(&mut self, glyph: &Glyph, half: Half) -> Result<(), B::Error> {
        self.engine.write_glyph(glyph, Some(half))
    }

    /// Black-on-white rendering
    pub fn invert(&mut self) -> Result<(), B::Error> {
        self.engine.invert()
    }

    /// White-on-black rendering
    pub fn normal(&mut self) -> Result<(), B::Error> {
        self.engine.normal()
    }

    /// Rotate the scan direction for the configured mount orientation
    pub fn flip(&mut self) -> Result<(), B::Error> {
        self.engine.flip()
    }

    pub fn power_on(&mut self) -> Result<(), B::Error> {
        self.engine.power_on()
    }

    pub fn power_off(&mut self) -> Result<(), B::Error> {
        self.engine.power_off()
    }

    /// Send a raw command byte to the controller
    pub fn send_command(&mut self, opcode: u8) -> Result<(), B::Error> {
        self.engine.bus.write_command(opcode)
    }

    /// Send a raw data byte to display RAM
    pub fn send_data(&mut self, byte: u8) -> Result<(), B::Error> {
        self.engine.bus.write_data(byte)
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.engine.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BusWrite {
        Command(u8),
        Data(u8),
    }

    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<BusWrite>,
    }

    impl DisplayBus for RecordingBus {
        type Error = core::convert::Infallible;

        fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error> {
            self.writes.push(BusWrite::Command(opcode));
            Ok(())
        }

        fn write_data(&mut self, byte: u8) -> Result<(), Self::Error> {
            self.writes.push(BusWrite::Data(byte));
            Ok(())
        }
    }

    fn data_bytes(writes: &[BusWrite]) -> Vec<u8> {
        writes
            .iter()
            .filter_map(|w| match w {
                BusWrite::Data(b) => Some(*b),
                BusWrite::Command(_) => None,
            })
            .collect()
    }

    /// Each glyph column duplicated in place
    fn duplicated(glyph: &Glyph) -> Vec<u8> {
        glyph.iter().flat_map(|&b| [b, b]).collect()
    }

    const GLYPH_A: Glyph = [0x00, 0x7E, 0x09, 0x09, 0x09, 0x7E, 0x00, 0x00];

    #[test]
    fn test_write_a_at_origin() {
        let mut display = Oled96::new(RecordingBus::default());
        display.set_cursor(0, 0).unwrap();
        display.write_str("A").unwrap();

        let writes = display.release().writes;
        assert_eq!(
            &writes[..3],
            &[
                BusWrite::Command(0xB0),
                BusWrite::Command(0x00),
                BusWrite::Command(0x10),
            ][..]
        );

        let glyph_writes: Vec<BusWrite> = duplicated(&GLYPH_A)
            .into_iter()
            .map(BusWrite::Data)
            .collect();
        assert_eq!(&writes[3..], &glyph_writes[..]);
    }

    #[test]
    fn test_string_renders_left_to_right() {
        let mut display = Oled96::new(RecordingBus::default());
        display.write_str("Hi").unwrap();

        let data = data_bytes(&display.release().writes);
        let mut expected = duplicated(oled96_core::font::glyph_for('H'));
        expected.extend(duplicated(oled96_core::font::glyph_for('i')));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_unsupported_char_renders_placeholder() {
        let mut display = Oled96::new(RecordingBus::default());
        display.write_str("\u{1}").unwrap();

        let data = data_bytes(&display.release().writes);
        assert_eq!(data, duplicated(&oled96_core::font::PLACEHOLDER));
    }

    #[test]
    fn test_number_matches_string() {
        let mut by_number = Oled96::new(RecordingBus::default());
        by_number.write_number(-5).unwrap();

        let mut by_string = Oled96::new(RecordingBus::default());
        by_string.write_str("-5").unwrap();

        assert_eq!(by_number.release().writes, by_string.release().writes);
    }

    #[test]
    fn test_number_extremes() {
        let mut by_number = Oled96::new(RecordingBus::default());
        by_number.write_number(i32::MIN).unwrap();

        let mut by_string = Oled96::new(RecordingBus::default());
        by_string.write_str("-2147483648").unwrap();

        assert_eq!(by_number.release().writes, by_string.release().writes);
    }

    #[test]
    fn test_custom_char_duplicates_bytes() {
        let glyph: Glyph = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];
        let mut display = Oled96::new(RecordingBus::default());
        display.write_custom_char(&glyph).unwrap();

        assert_eq!(data_bytes(&display.release().writes), duplicated(&glyph));
    }

    #[test]
    fn test_cursor_clamps_like_the_edge() {
        let mut clamped = Oled96::new(RecordingBus::default());
        clamped.set_cursor(100, 100).unwrap();

        let mut edge = Oled96::new(RecordingBus::default());
        edge.set_cursor(7, 15).unwrap();

        assert_eq!(clamped.release().writes, edge.release().writes);
    }

    #[test]
    fn test_clear_blanks_full_grid() {
        let mut display = Oled96::new(RecordingBus::default());
        display.clear().unwrap();

        let writes = display.release().writes;
        // 8 rows x 16 columns x 16 data bytes per space glyph
        let data = data_bytes(&writes);
        assert_eq!(data.len(), 2048);
        assert!(data.iter().all(|&b| b == 0));

        // Repainted with the panel off, then back on
        assert_eq!(writes[0], BusWrite::Command(cmd::DISPLAY_OFF));
        let on_pos = writes
            .iter()
            .position(|&w| w == BusWrite::Command(cmd::DISPLAY_ON))
            .unwrap();
        assert_eq!(on_pos, writes.len() - 4);

        // Cursor back at the origin
        assert_eq!(
            &writes[writes.len() - 3..],
            &[
                BusWrite::Command(0xB0),
                BusWrite::Command(0x00),
                BusWrite::Command(0x10),
            ][..]
        );
    }

    #[test]
    fn test_double_clear_blanks_its_grid() {
        let mut display = Oled96Double::new(RecordingBus::default());
        display.clear().unwrap();

        let data = data_bytes(&display.release().writes);
        // 4 rows x 8 columns x 16 data bytes per space glyph
        assert_eq!(data.len(), 512);
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_range_writes_spaces_only() {
        let mut display = Oled96::new(RecordingBus::default());
        display.clear_range(3).unwrap();

        let writes = display.release().writes;
        assert_eq!(writes.len(), 3 * 16);
        assert!(writes.iter().all(|&w| w == BusWrite::Data(0)));
    }

    #[test]
    fn test_double_height_transforms_columns() {
        for half in [Half::Top, Half::Bottom] {
            let mut display = Oled96Double::new(RecordingBus::default());
            display.write_str("A", half).unwrap();

            let expected: Vec<u8> = GLYPH_A
                .iter()
                .flat_map(|&b| {
                    let doubled = oled96_core::double_height(b, half);
                    [doubled, doubled]
                })
                .collect();
            assert_eq!(data_bytes(&display.release().writes), expected);
        }
    }

    #[test]
    fn test_double_cursor_uses_wide_cells() {
        let mut display = Oled96Double::new(RecordingBus::default());
        display.set_cursor(1, 1).unwrap();

        assert_eq!(
            display.release().writes,
            [
                BusWrite::Command(0xB1),
                BusWrite::Command(0x00),
                BusWrite::Command(0x11),
            ]
        );
    }

    #[test]
    fn test_invert_normal_power_opcodes() {
        let mut display = Oled96::new(RecordingBus::default());
        display.invert().unwrap();
        display.normal().unwrap();
        display.power_off().unwrap();
        display.power_on().unwrap();

        assert_eq!(
            display.release().writes,
            [
                BusWrite::Command(0xA7),
                BusWrite::Command(0xA6),
                BusWrite::Command(0xAE),
                BusWrite::Command(0xAF),
            ]
        );
    }

    #[test]
    fn test_flip_follows_orientation_config() {
        let mut upright = Oled96::new(RecordingBus::default());
        upright.flip().unwrap();
        assert_eq!(
            upright.release().writes,
            [
                BusWrite::Command(0xAE),
                BusWrite::Command(0xC0),
                BusWrite::Command(0xA0),
                BusWrite::Command(0xAF),
            ]
        );

        let mut flipped = Oled96::with_config(
            RecordingBus::default(),
            DisplayConfig { flipped: true },
        );
        flipped.flip().unwrap();
        assert_eq!(
            flipped.release().writes,
            [
                BusWrite::Command(0xAE),
                BusWrite::Command(0xC0),
                BusWrite::Command(0xA1),
                BusWrite::Command(0xAF),
            ]
        );
    }

    #[test]
    fn test_init_sends_sequence_then_clears() {
        let mut display = Oled96::new(RecordingBus::default());
        display.init().unwrap();

        let writes = display.release().writes;
        let prefix: Vec<BusWrite> = INIT_SEQUENCE
            .iter()
            .map(|&opcode| BusWrite::Command(opcode))
            .collect();
        assert_eq!(&writes[..prefix.len()], &prefix[..]);

        // Followed by a full clear
        assert_eq!(writes[prefix.len()], BusWrite::Command(cmd::DISPLAY_OFF));
        assert_eq!(data_bytes(&writes).len(), 2048);
    }

    #[test]
    fn test_send_raw_passthrough() {
        let mut display = Oled96::new(RecordingBus::default());
        display.send_command(0x81).unwrap();
        display.send_data(0x55).unwrap();

        assert_eq!(
            display.release().writes,
            [BusWrite::Command(0x81), BusWrite::Data(0x55)]
        );
    }
}
