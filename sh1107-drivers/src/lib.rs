//! SH1107 OLED driver
//!
//! Three layers, leaves first:
//!
//! - [`transport`] - command and data register writes over an
//!   [`I2cBus`](sh1107_hal::I2cBus)
//! - [`display::controller`] - the SH1107 command set and power-on
//!   init sequence
//! - [`display::sh1107`] - the user-facing [`Sh1107`] driver that owns
//!   the framebuffer and flushes it page by page
//!
//! # Example
//!
//! ```no_run
//! use sh1107_core::{Color, DisplayConfig, FONT_5X7};
//! use sh1107_drivers::Sh1107;
//!
//! # fn example<B: sh1107_hal::I2cBus>(bus: B) -> Result<(), sh1107_drivers::Error<B::Error>> {
//! let mut oled: Sh1107<B> = Sh1107::new(bus, DisplayConfig::default());
//! oled.init()?;
//! oled.set_cursor(0, 0);
//! oled.put_string("Hello", &FONT_5X7, Color::On)?;
//! oled.flush()?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod error;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use display::{Controller, Sh1107};
pub use error::Error;
pub use transport::{I2cTransport, TransportError};
