//! SSD1306 controller commands
//!
//! The opcode table, the fixed power-on sequence, and the cursor address
//! builder. The scroll opcodes are part of the controller's command set but
//! this driver never issues them.

use oled96_core::geometry::Variant;

/// SSD1306 command opcodes
#[allow(dead_code)]
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const CHARGE_PUMP: u8 = 0x8D;
    pub const MEMORY_MODE: u8 = 0x20;
    /// Column address 127 maps to SEG0; 0xA0 restores the normal mapping
    pub const SEG_REMAP: u8 = 0xA1;
    pub const SEG_REMAP_NORMAL: u8 = 0xA0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const COLUMN_ADDR: u8 = 0x21;
    pub const PAGE_ADDR: u8 = 0x22;
    pub const ACTIVATE_SCROLL: u8 = 0x2F;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;
    pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;
    pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;
    pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;
    pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;
}

/// Power-on initialization sequence for 128x64 modules
///
/// Sent verbatim as commands, one byte at a time. Values are the charge-pump
/// (internal DC/DC) configuration.
pub const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_DISPLAY_CLOCK_DIV,
    0x80,
    cmd::SET_MULTIPLEX,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::CHARGE_PUMP,
    0x14, // internal DC/DC
    cmd::SEG_REMAP,
    cmd::COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1, // internal charge pump timing
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_ALL_ON_RESUME,
    cmd::NORMAL_DISPLAY,
    cmd::DISPLAY_ON,
];

/// Build the three commands that move the text cursor
///
/// The position is clamped to the variant's grid, converted to a pixel
/// column, and encoded as page select plus the split column address. The
/// commands must be sent in this order before any glyph data.
pub fn cursor_commands(variant: Variant, row: u8, col: u8) -> [u8; 3] {
    let (row, col) = variant.clamp(row, col);
    let pixel_col = col * variant.cell_width();

    [
        cmd::SET_PAGE_ADDR + row,
        cmd::SET_LOW_COLUMN | (pixel_col & 0x0F),
        cmd::SET_HIGH_COLUMN | ((pixel_col >> 4) & 0x0F),
    ]
}
