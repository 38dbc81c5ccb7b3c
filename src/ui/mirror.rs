//! Horizontal mirroring draw target
//!
//! Wraps another `DrawTarget` and reflects every pixel about the vertical
//! midline of a given area. Right-to-left elements draw themselves in their
//! natural left-to-right coordinates through this adapter.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Draw target adapter that flips the x axis about an area's midline.
///
/// A pixel column `x` inside `area` lands on `2 * left + width - 1 - x`, so the
/// leftmost column of the area swaps with the rightmost one.
pub struct Mirrored<'a, D> {
    parent: &'a mut D,
    axis_sum: i32,
}

impl<'a, D> Mirrored<'a, D> {
    pub fn new(parent: &'a mut D, area: Rectangle) -> Self {
        Self {
            parent,
            axis_sum: 2 * area.top_left.x + area.size.width as i32 - 1,
        }
    }

    /// Reflect a single x coordinate.
    #[inline]
    pub fn mirror_x(&self, x: i32) -> i32 {
        self.axis_sum - x
    }
}

impl<D: DrawTarget> Dimensions for Mirrored<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        self.parent.bounding_box()
    }
}

impl<D: DrawTarget> DrawTarget for Mirrored<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let axis_sum = self.axis_sum;
        self.parent.draw_iter(
            pixels
                .into_iter()
                .map(move |Pixel(p, color)| Pixel(Point::new(axis_sum - p.x, p.y), color)),
        )
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }

        // The rightmost column of the source becomes the leftmost of the target
        let right = area.top_left.x + area.size.width as i32 - 1;
        let flipped = Rectangle::new(Point::new(self.mirror_x(right), area.top_left.y), area.size);
        self.parent.fill_solid(&flipped, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.parent.clear(color)
    }
}
