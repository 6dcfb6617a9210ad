//! Recording I2C bus for host tests

use sh1107_hal::{I2cBus, I2cBusError};

use crate::transport::{CONTROL_COMMAND, CONTROL_DATA};

/// Bus that records every write and can simulate a missing device or a
/// NACK after a number of successful writes
pub struct MockBus {
    /// Device acknowledges probes and writes
    pub present: bool,
    /// Fail every write once this many writes succeeded
    pub fail_after: Option<usize>,
    /// Successful writes as (address, bytes)
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Number of probe calls
    pub probes: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            present: true,
            fail_after: None,
            writes: Vec::new(),
            probes: 0,
        }
    }

    pub fn absent() -> Self {
        Self {
            present: false,
            ..Self::new()
        }
    }

    pub fn failing_after(writes: usize) -> Self {
        Self {
            fail_after: Some(writes),
            ..Self::new()
        }
    }

    /// Command bytes in transmission order
    pub fn commands(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(_, bytes)| bytes.first() == Some(&CONTROL_COMMAND))
            .flat_map(|(_, bytes)| bytes[1..].iter().copied())
            .collect()
    }

    /// Payloads of data writes in transmission order
    pub fn data_writes(&self) -> Vec<&[u8]> {
        self.writes
            .iter()
            .filter(|(_, bytes)| bytes.first() == Some(&CONTROL_DATA))
            .map(|(_, bytes)| &bytes[1..])
            .collect()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl I2cBus for MockBus {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        if !self.present {
            return Err(I2cBusError::NotPresent);
        }
        if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
            return Err(I2cBusError::Nack);
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, _address: u8, _buf: &mut [u8]) -> Result<(), Self::Error> {
        Err(I2cBusError::Other)
    }

    fn write_read(
        &mut self,
        _address: u8,
        _write_data: &[u8],
        _read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        Err(I2cBusError::Other)
    }

    fn probe(&mut self, _address: u8) -> bool {
        self.probes += 1;
        self.present
    }
}
