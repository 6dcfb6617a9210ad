//! I2C transport adapter
//!
//! The SH1107 multiplexes its command and data registers behind a
//! control byte at the start of each I2C write:
//!
//! ```text
//! ┌─────────┬──────┬────────────────────┐
//! │ ADDRESS │ 0x00 │ command byte       │   command register
//! ├─────────┼──────┼────────────────────┤
//! │ ADDRESS │ 0x40 │ data (1-255 bytes) │   display RAM
//! └─────────┴──────┴────────────────────┘
//! ```
//!
//! Failures are propagated as-is; this layer never retries.

use sh1107_hal::I2cBus;

/// Control byte selecting the command register
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte selecting display RAM
pub const CONTROL_DATA: u8 = 0x40;

/// Largest data payload per write (one page row of a 255-column panel)
pub const MAX_DATA_LEN: usize = 255;

/// Transport-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<E> {
    /// Bus NACK, timeout or missing device
    Bus(E),
    /// Data payload longer than [`MAX_DATA_LEN`]; nothing was sent
    PayloadTooLong(usize),
}

/// Command/data writer for one device on an I2C bus
///
/// Owns the bus handle; holds no other state.
pub struct I2cTransport<B> {
    bus: B,
    address: u8,
}

impl<B: I2cBus> I2cTransport<B> {
    /// Create a transport for the device at `address`
    ///
    /// No bus traffic is generated.
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Check whether the device acknowledges its address
    pub fn probe(&mut self) -> bool {
        self.bus.probe(self.address)
    }

    /// Send one byte to the command register
    pub fn write_command(&mut self, command: u8) -> Result<(), TransportError<B::Error>> {
        self.bus
            .write(self.address, &[CONTROL_COMMAND, command])
            .map_err(TransportError::Bus)
    }

    /// Send a block of bytes to display RAM in a single transfer
    ///
    /// An empty block is a no-op.
    pub fn write_data(&mut self, data: &[u8]) -> Result<(), TransportError<B::Error>> {
        if data.is_empty() {
            return Ok(());
        }
        if data.len() > MAX_DATA_LEN {
            return Err(TransportError::PayloadTooLong(data.len()));
        }

        let mut frame = [0u8; MAX_DATA_LEN + 1];
        frame[0] = CONTROL_DATA;
        frame[1..=data.len()].copy_from_slice(data);
        self.bus
            .write(self.address, &frame[..=data.len()])
            .map_err(TransportError::Bus)
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    #[cfg(test)]
    pub(crate) fn bus(&self) -> &B {
        &self.bus
    }

    #[cfg(test)]
    pub(crate) fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
