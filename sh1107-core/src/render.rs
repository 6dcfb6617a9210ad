//! Cursor-based text renderer
//!
//! [`TextRenderer`] owns the framebuffer together with the drawing state
//! (text cursor and inversion flag). Everything here is an in-memory
//! mutation; nothing reaches the panel until the driver flushes.
//!
//! Two bounds policies coexist:
//! - [`TextRenderer::set_pixel`] silently drops pixels outside the panel.
//! - [`TextRenderer::put_char`] refuses a glyph that does not fit whole,
//!   leaving both the buffer and the cursor untouched.

use crate::error::RenderError;
use crate::font::{is_lit, Font};
use crate::framebuffer::{Color, Framebuffer, PAGES, WIDTH};

/// Renderer sized for the 128x64 SH1107 panel
pub type Sh1107Renderer = TextRenderer<WIDTH, PAGES>;

/// Framebuffer plus text cursor and inversion state
#[derive(Debug, Clone)]
pub struct TextRenderer<const WIDTH: usize, const PAGES: usize> {
    buffer: Framebuffer<WIDTH, PAGES>,
    /// Top-left corner of the next glyph
    cursor: (u16, u16),
    /// Swap On/Off for every subsequent pixel write
    inverted: bool,
}

impl<const W: usize, const P: usize> Default for TextRenderer<W, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const P: usize> TextRenderer<W, P> {
    /// Create a renderer with a blank buffer and the cursor at (0, 0)
    pub const fn new() -> Self {
        Self {
            buffer: Framebuffer::new(),
            cursor: (0, 0),
            inverted: false,
        }
    }

    /// Panel width in pixels
    pub const fn width(&self) -> usize {
        W
    }

    /// Panel height in pixels
    pub const fn height(&self) -> usize {
        P * 8
    }

    /// Fill the whole buffer with one color
    ///
    /// Inversion does not apply: `Off` always means all bytes 0x00.
    pub fn fill(&mut self, color: Color) {
        self.buffer.fill(color);
    }

    /// Draw one pixel
    ///
    /// Out-of-bounds coordinates are a silent no-op. The inversion flag
    /// is applied before the bit is written.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        let color = if self.inverted { !color } else { color };
        self.buffer.set(x as usize, y as usize, color);
    }

    /// Read back the stored bit of one pixel, `None` outside the panel
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        self.buffer.get(x as usize, y as usize)
    }

    /// Move the text cursor
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }

    /// Current text cursor
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Enable or disable inversion for subsequent draws
    ///
    /// Already drawn pixels keep their bits.
    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// Check if draws are currently inverted
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// The pixel store, for flushing and inspection
    pub fn framebuffer(&self) -> &Framebuffer<W, P> {
        &self.buffer
    }

    /// Check whether a `font` glyph fits at the cursor
    pub fn fits<F: Font>(&self, font: &F) -> bool {
        let (x, y) = self.cursor;
        x as usize + font.width() as usize <= W && y as usize + font.height() as usize <= P * 8
    }

    /// Draw one character at the cursor and advance the cursor by the
    /// glyph width
    ///
    /// Glyphs are opaque: background pixels are painted with `!color`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::OutOfBounds`] if the glyph does not fit;
    /// nothing is drawn and the cursor stays where it was.
    pub fn put_char<F: Font>(
        &mut self,
        ch: char,
        font: &F,
        color: Color,
    ) -> Result<char, RenderError> {
        if !self.fits(font) {
            return Err(RenderError::OutOfBounds(ch));
        }

        let (x0, y0) = self.cursor;
        for row in 0..font.height() {
            let bits = font.glyph_row(ch, row);
            for col in 0..font.width() {
                let ink = if is_lit(bits, col) { color } else { !color };
                self.set_pixel(x0 + col as u16, y0 + row as u16, ink);
            }
        }

        self.cursor.0 += font.width() as u16;
        Ok(ch)
    }

    /// Draw a string character by character
    ///
    /// Stops at the first character that does not fit. Glyphs already
    /// drawn stay drawn. There is no wrapping: move the cursor between
    /// lines.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::OutOfBounds`] carrying the first character
    /// that could not be written.
    pub fn put_string<F: Font>(
        &mut self,
        text: &str,
        font: &F,
        color: Color,
    ) -> Result<(), RenderError> {
        for ch in text.chars() {
            self.put_char(ch, font, color)?;
        }
        Ok(())
    }
}
