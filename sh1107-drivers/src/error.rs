//! Error types for the SH1107 driver

use sh1107_core::RenderError;

use crate::transport::TransportError;

/// Errors that can occur during display operations
///
/// Nothing here is fatal: every variant is returned to the caller, who
/// decides whether to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The panel did not acknowledge its address during init
    NotDetected,
    /// A bus operation was attempted before a successful init
    NotInitialized,
    /// The glyph for this character does not fit at the cursor
    OutOfBounds(char),
    /// Command or data write failed on the bus
    Transport(TransportError<E>),
}

impl<E> From<TransportError<E>> for Error<E> {
    fn from(e: TransportError<E>) -> Self {
        Error::Transport(e)
    }
}

impl<E> From<RenderError> for Error<E> {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::OutOfBounds(ch) => Error::OutOfBounds(ch),
        }
    }
}
