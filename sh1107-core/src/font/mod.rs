//! Bitmap fonts
//!
//! A font is a fixed-size cell of `width` x `height` pixels per
//! character. Each glyph row is a 16-bit word scanned from the most
//! significant bit: column `j` is lit when `(row << j) & 0x8000 != 0`.
//! Glyphs are indexed from the first printable ASCII code (32).

mod ascii_5x7;

pub use ascii_5x7::{Ascii5x7, FONT_5X7};

/// First character code present in a font table (ASCII space)
pub const FIRST_PRINTABLE: u32 = 32;

/// Mask selecting the leftmost column of a glyph row
pub const ROW_HIGH_BIT: u16 = 0x8000;

/// Widest glyph a 16-bit row can describe
pub const MAX_WIDTH: u8 = 16;

/// Font resource consumed by the renderer
pub trait Font {
    /// Glyph cell width in pixels (at most [`MAX_WIDTH`])
    fn width(&self) -> u8;

    /// Glyph cell height in pixels
    fn height(&self) -> u8;

    /// Packed bits of one glyph row, MSB = leftmost column
    ///
    /// Characters the font does not cover return blank rows.
    fn glyph_row(&self, ch: char, row: u8) -> u16;
}

/// Whether column `col` of a packed glyph row is lit
pub const fn is_lit(row_bits: u16, col: u8) -> bool {
    col < MAX_WIDTH && (row_bits << col) & ROW_HIGH_BIT != 0
}

impl<F: Font + ?Sized> Font for &F {
    fn width(&self) -> u8 {
        F::width(self)
    }

    fn height(&self) -> u8 {
        F::height(self)
    }

    fn glyph_row(&self, ch: char, row: u8) -> u16 {
        F::glyph_row(self, ch, row)
    }
}

/// Row-table font
///
/// `data` holds `height` rows per glyph, glyphs consecutive from
/// [`FIRST_PRINTABLE`]. This is the layout most C font headers for
/// SSD1306/SH110x panels use, so their tables can be pasted in as-is.
#[derive(Debug, Clone, Copy)]
pub struct FontDef {
    /// Glyph width in pixels
    pub width: u8,
    /// Glyph height in pixels
    pub height: u8,
    /// Packed glyph rows
    pub data: &'static [u16],
}

impl FontDef {
    /// Create a row-table font
    pub const fn new(width: u8, height: u8, data: &'static [u16]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Number of glyphs in the table
    pub const fn glyph_count(&self) -> usize {
        if self.height == 0 {
            0
        } else {
            self.data.len() / self.height as usize
        }
    }
}

impl Font for FontDef {
    fn width(&self) -> u8 {
        self.width
    }

    fn height(&self) -> u8 {
        self.height
    }

    fn glyph_row(&self, ch: char, row: u8) -> u16 {
        let Some(index) = (ch as u32).checked_sub(FIRST_PRINTABLE) else {
            return 0;
        };
        if row >= self.height {
            return 0;
        }
        let offset = index as usize * self.height as usize + row as usize;
        self.data.get(offset).copied().unwrap_or(0)
    }
}
