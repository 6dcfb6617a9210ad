//! Rendering errors

/// Errors raised by in-memory drawing
///
/// Single-pixel writes outside the panel are dropped silently and never
/// produce an error; only whole-glyph placement is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// The glyph for this character does not fit at the current cursor
    OutOfBounds(char),
}

impl RenderError {
    /// The character that could not be written
    pub fn character(&self) -> char {
        match self {
            RenderError::OutOfBounds(ch) => *ch,
        }
    }
}
