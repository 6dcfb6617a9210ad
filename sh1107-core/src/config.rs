//! Panel configuration
//!
//! Only the values a board integrator may legitimately change live
//! here. The column offset and the timing parameters of the init
//! sequence are controller calibration and stay in the driver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default 7-bit I2C address of the FeatherWing SH1107 panel
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Contrast transmitted by the init sequence
pub const DEFAULT_CONTRAST: u8 = 0x4F;

/// SH1107 panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// 7-bit I2C address (0x3C or 0x3D depending on the strap)
    pub address: u8,
    /// Initial contrast (0-255)
    pub contrast: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

impl DisplayConfig {
    /// Config for a panel at `address` with the default contrast
    pub const fn new(address: u8) -> Self {
        Self {
            address,
            contrast: DEFAULT_CONTRAST,
        }
    }

    /// Same config with a different initial contrast
    pub const fn with_contrast(self, contrast: u8) -> Self {
        Self { contrast, ..self }
    }
}
