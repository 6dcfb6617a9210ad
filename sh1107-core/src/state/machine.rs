//! State machine definition

use super::events::Event;

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No init has succeeded yet
    #[default]
    Uninitialized,
    /// Probe failed; only an explicit new init attempt leaves this state
    NotDetected,
    /// Init sequence sent; `display_on` tracks the power sub-state
    Ready {
        /// Panel is powered on
        display_on: bool,
    },
}

impl State {
    /// Check if the controller accepts addressed writes
    pub fn is_ready(&self) -> bool {
        matches!(self, State::Ready { .. })
    }

    /// Check if the panel is powered on
    pub fn is_display_on(&self) -> bool {
        matches!(self, State::Ready { display_on: true })
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Any init attempt may be the first, a retry, or a re-init
            (_, ProbeFailed) => NotDetected,
            (_, InitComplete) => Ready { display_on: true },

            // Power toggles only exist inside Ready
            (Ready { .. }, DisplayOn) => Ready { display_on: true },
            (Ready { .. }, DisplayOff) => Ready { display_on: false },

            // Default: stay in current state
            _ => self,
        }
    }
}
