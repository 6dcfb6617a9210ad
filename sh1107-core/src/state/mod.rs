//! Controller lifecycle state machine
//!
//! The controller is either waiting for its first init, missing from the
//! bus, or ready with the panel powered on or off.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
