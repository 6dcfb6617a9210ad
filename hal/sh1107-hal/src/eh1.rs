//! `embedded-hal` 1.0 adapter
//!
//! Lets any blocking `embedded_hal::i2c::I2c` master (rp2040-hal,
//! esp-hal, stm32 HALs, linux-embedded-hal, ...) drive the SH1107.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};

use crate::i2c::{I2cBus, I2cBusError};

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => I2cBusError::NotPresent,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// [`I2cBus`] implementation over an `embedded-hal` I2C master
///
/// Timeouts are whatever the wrapped HAL was configured with; configure
/// it from [`I2cConfig`](crate::I2cConfig) when constructing the
/// peripheral.
pub struct EmbeddedHalBus<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> EmbeddedHalBus<I2C> {
    /// Wrap an I2C master
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the I2C master back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> I2cBus for EmbeddedHalBus<I2C> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address, data).map_err(|e| e.kind().into())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address, buf).map_err(|e| e.kind().into())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c
            .write_read(address, write_data, read_buf)
            .map_err(|e| e.kind().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, Operation};

    /// Fake master answering only at one address
    struct FakeI2c {
        address: u8,
        last_write_len: usize,
    }

    impl ErrorType for FakeI2c {
        type Error = ErrorKind;
    }

    impl I2c for FakeI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if address != self.address {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for op in operations {
                match op {
                    Operation::Write(data) => self.last_write_len = data.len(),
                    Operation::Read(buf) => buf.fill(0xA5),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(I2cBusError::from(ErrorKind::Bus), I2cBusError::Bus);
        assert_eq!(
            I2cBusError::from(ErrorKind::ArbitrationLoss),
            I2cBusError::ArbitrationLost
        );
        assert_eq!(
            I2cBusError::from(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)),
            I2cBusError::Nack
        );
        assert_eq!(
            I2cBusError::from(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
            I2cBusError::NotPresent
        );
        assert_eq!(I2cBusError::from(ErrorKind::Other), I2cBusError::Other);
    }

    #[test]
    fn test_probe_and_write() {
        let mut bus = EmbeddedHalBus::new(FakeI2c {
            address: 0x3C,
            last_write_len: 0,
        });

        assert!(bus.probe(0x3C));
        assert!(!bus.probe(0x3D));

        bus.write(0x3C, &[0x00, 0xAF]).unwrap();
        assert_eq!(bus.release().last_write_len, 2);
    }

    #[test]
    fn test_missing_device_reports_not_present() {
        let mut bus = EmbeddedHalBus::new(FakeI2c {
            address: 0x3C,
            last_write_len: 0,
        });
        assert_eq!(bus.write(0x3D, &[0x00]), Err(I2cBusError::NotPresent));

        let mut buf = [0u8; 2];
        bus.write_read(0x3C, &[0x00], &mut buf).unwrap();
        assert_eq!(buf, [0xA5, 0xA5]);
    }
}
