//! `embedded-graphics` integration
//!
//! Lets the renderer act as a [`DrawTarget`] so primitives and text
//! from the embedded-graphics ecosystem can be drawn into the same
//! buffer as the built-in glyph renderer. Pixels go through
//! [`TextRenderer::set_pixel`], so clipping and inversion behave the
//! same way.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, Size},
};

use crate::framebuffer::Color;
use crate::render::TextRenderer;

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        Color::from(color.is_on())
    }
}

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        BinaryColor::from(color.is_on())
    }
}

impl<const W: usize, const P: usize> OriginDimensions for TextRenderer<W, P> {
    fn size(&self) -> Size {
        Size::new(W as u32, (P * 8) as u32)
    }
}

impl<const W: usize, const P: usize> DrawTarget for TextRenderer<W, P> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) {
                self.set_pixel(x, y, color.into());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}
