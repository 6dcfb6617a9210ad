//! Board-agnostic core logic for the SH1107 OLED driver
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Pixel storage in the controller's page layout ([`framebuffer`])
//! - Bitmap font lookup and the bundled 5x7 ASCII font ([`font`])
//! - Cursor-based glyph and string rendering ([`render`])
//! - Controller lifecycle state machine ([`state`])
//! - Panel configuration ([`config`])
//!
//! All operations here are pure in-memory mutations; the drivers crate
//! is responsible for pushing the framebuffer to the panel.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod font;
pub mod framebuffer;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod render;
pub mod state;

pub use config::DisplayConfig;
pub use error::RenderError;
pub use font::{Font, FontDef, FONT_5X7};
pub use framebuffer::{Color, Framebuffer, HEIGHT, PAGES, WIDTH};
pub use render::{Sh1107Renderer, TextRenderer};
pub use state::{Event, State};
