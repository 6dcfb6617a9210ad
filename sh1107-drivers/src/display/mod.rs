//! SH1107 display driver
//!
//! - [`commands`] - opcode table and typed command encoding
//! - [`controller`] - init sequence, power, contrast and page addressing
//! - [`sh1107`] - framebuffer-owning driver exposed to applications

pub mod commands;
pub mod controller;
pub mod sh1107;

pub use commands::{AddressingMode, Command};
pub use controller::{Controller, COLUMN_OFFSET};
pub use sh1107::Sh1107;
