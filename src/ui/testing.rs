//! Pixel-recording draw target for unit tests

use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use std::collections::BTreeMap;

/// Records the last color written to every pixel, without bounds limits.
pub struct PixelRecorder {
    pixels: BTreeMap<(i32, i32), Rgb565>,
}

impl PixelRecorder {
    pub fn new() -> Self {
        Self {
            pixels: BTreeMap::new(),
        }
    }

    pub fn color_at(&self, point: Point) -> Option<Rgb565> {
        self.pixels.get(&(point.x, point.y)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Number of pixels currently holding `color`.
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.values().filter(|c| **c == color).count()
    }

    /// Number of pixels holding `color` in the column range `[x_start, x_end)`.
    pub fn count_in_columns(&self, color: Rgb565, x_start: i32, x_end: i32) -> usize {
        self.pixels
            .iter()
            .filter(|((x, _), c)| *x >= x_start && *x < x_end && **c == color)
            .count()
    }
}

impl Dimensions for PixelRecorder {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(Point::new(-1024, -1024), Size::new(4096, 4096))
    }
}

impl DrawTarget for PixelRecorder {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.pixels.insert((coord.x, coord.y), color);
        }
        Ok(())
    }
}
