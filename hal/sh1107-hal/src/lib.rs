//! SH1107 Hardware Abstraction Layer
//!
//! This crate defines the bus abstraction the SH1107 driver talks through.
//! Chip-specific HALs (or the bundled `embedded-hal` adapter) implement
//! [`I2cBus`], so the same driver code runs on any MCU and against mock
//! buses on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  sh1107-drivers (transport, controller) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sh1107-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ EmbeddedHalBus│       │  chip HAL /   │
//! │ (embedded-hal)│       │  mock bus     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - blocking I2C master operations plus device probing

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod i2c;

#[cfg(feature = "embedded-hal")]
pub mod eh1;

// Re-export key types at crate root for convenience
pub use i2c::{I2cBus, I2cBusError, I2cConfig};

#[cfg(feature = "embedded-hal")]
pub use eh1::EmbeddedHalBus;
