//! I2C transport for the display controller
//!
//! The SSD1306 frames every transfer with a control byte: 0x00 introduces a
//! command, 0x40 a display RAM data byte.

use embedded_hal::i2c::I2c;
use oled96_core::bus::DisplayBus;

/// Default I2C address (most modules; some boards strap 0x3D)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// `DisplayBus` implementation over a blocking I2C peripheral
pub struct I2cDisplayBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cDisplayBus<I2C> {
    /// Create a bus at the default device address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a bus at a specific 7-bit device address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the underlying peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> DisplayBus for I2cDisplayBus<I2C> {
    type Error = I2C::Error;

    fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, opcode])
    }

    fn write_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[CONTROL_DATA, byte])
    }
}
