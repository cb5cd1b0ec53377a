//! Display bus abstraction
//!
//! Provides the trait implemented by bus transports that carry bytes to the
//! display controller.

/// Two-wire bus to the display controller
///
/// The controller distinguishes control bytes (opcodes and their arguments)
/// from data bytes (pixel columns written to display RAM); implementations
/// handle the framing that makes that distinction on the wire.
///
/// Byte arguments are `u8`, so values are in range by construction.
pub trait DisplayBus {
    /// Error type for bus operations
    type Error;

    /// Send one command byte to the controller
    fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error>;

    /// Send one data byte to the controller's display RAM
    fn write_data(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl<B: DisplayBus> DisplayBus for &mut B {
    type Error = B::Error;

    fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error> {
        (**self).write_command(opcode)
    }

    fn write_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_data(byte)
    }
}
