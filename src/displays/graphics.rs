//! `embedded-graphics` support for [`Framebuffer`]

use display_interface::DisplayError;
use embedded_graphics::pixelcolor::{Gray4, GrayColor};
use embedded_graphics::prelude::*;

use super::{Framebuffer, GrayDisplay};

impl<const N: usize> DrawTarget for Framebuffer<N> {
    type Error = DisplayError;
    type Color = Gray4;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.luma());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.clear_buffer(color.luma());
        Ok(())
    }
}

impl<const N: usize> OriginDimensions for Framebuffer<N> {
    fn size(&self) -> Size {
        let (width, height) = self.logical_size();
        Size::new(width.into(), height.into())
    }
}
