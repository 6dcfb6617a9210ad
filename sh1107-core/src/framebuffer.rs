//! Monochrome framebuffer in SH1107 page layout
//!
//! The panel's memory is split into pages of 8 pixel rows. Each byte of
//! a page is one column of those 8 rows, least significant bit on top:
//!
//! ```text
//!            x = 0    x = 1          x = WIDTH-1
//! page 0   [byte 0] [byte 1]  ...  [byte W-1]      rows 0..8
//! page 1   [byte W] [byte W+1] ... [byte 2W-1]     rows 8..16
//! ...
//! ```
//!
//! Byte `i`, bit `b` is pixel `(i % WIDTH, 8 * (i / WIDTH) + b)`.

use core::ops::Not;

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel dark
    #[default]
    Off,
    /// Pixel lit
    On,
}

impl Color {
    /// Byte value that sets all 8 pixels of a page column to this color
    pub const fn fill_byte(self) -> u8 {
        match self {
            Color::Off => 0x00,
            Color::On => 0xFF,
        }
    }

    /// Check if this color lights the pixel
    pub const fn is_on(self) -> bool {
        matches!(self, Color::On)
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on {
            Color::On
        } else {
            Color::Off
        }
    }
}

/// 1-bit framebuffer of `WIDTH` columns by `PAGES * 8` rows
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer<const WIDTH: usize, const PAGES: usize> {
    pages: [[u8; WIDTH]; PAGES],
}

impl<const W: usize, const P: usize> Default for Framebuffer<W, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const P: usize> Framebuffer<W, P> {
    /// Width in pixels
    pub const WIDTH: usize = W;

    /// Height in pixels
    pub const HEIGHT: usize = P * 8;

    /// Size of the whole buffer in bytes (`WIDTH * HEIGHT / 8`)
    pub const BYTES: usize = W * P;

    /// Create a blank framebuffer (all pixels off)
    pub const fn new() -> Self {
        Self {
            pages: [[0; W]; P],
        }
    }

    /// Set every byte to 0x00 (`Off`) or 0xFF (`On`)
    pub fn fill(&mut self, color: Color) {
        let byte = color.fill_byte();
        for page in self.pages.iter_mut() {
            page.fill(byte);
        }
    }

    /// Set or clear one pixel
    ///
    /// Coordinates outside the buffer are ignored. Returns whether the
    /// pixel was inside the buffer.
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        if x >= W || y >= Self::HEIGHT {
            return false;
        }

        let mask = 1u8 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if color.is_on() {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        true
    }

    /// Read back one pixel, `None` outside the buffer
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= W || y >= Self::HEIGHT {
            return None;
        }
        Some(Color::from(self.pages[y / 8][x] & (1 << (y % 8)) != 0))
    }

    /// One page (8 rows) as it is sent to the controller, `None` past
    /// the last page
    pub fn page(&self, index: usize) -> Option<&[u8; W]> {
        self.pages.get(index)
    }

    /// All pages, top to bottom
    pub fn pages(&self) -> impl Iterator<Item = &[u8; W]> {
        self.pages.iter()
    }

    /// Byte `index` in flat transfer order, `None` past the end
    pub fn byte(&self, index: usize) -> Option<u8> {
        if W == 0 {
            return None;
        }
        self.pages.get(index / W).map(|page| page[index % W])
    }
}

#[cfg(feature = "defmt")]
impl<const W: usize, const P: usize> defmt::Format for Framebuffer<W, P> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Framebuffer[{}x{}]", W, P * 8);
    }
}

impl<const W: usize, const P: usize> core::fmt::Debug for Framebuffer<W, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Framebuffer[{}x{}]", W, P * 8)
    }
}
