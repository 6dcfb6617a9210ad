//! Events that trigger controller state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Presence probe got no acknowledge
    ProbeFailed,
    /// Full init sequence was transmitted (panel ends powered on)
    InitComplete,
    /// Display-on command was transmitted
    DisplayOn,
    /// Display-off (sleep) command was transmitted
    DisplayOff,
}
