//! Star placement
//!
//! Stars are spread evenly across the widget width: with `n` stars of width
//! `iw` in a row of width `W`, consecutive centers are `d + iw/2` apart where
//! `d = (W - iw*n) / (n+1) + iw/2`, which leaves equal margins at both ends.
//! If the row is narrower than `iw*n` the frames overlap; callers avoid that
//! with their own size constraints.
//!
//! Geometry is kept in widget-local, unmirrored coordinates. Right-to-left
//! rendering mirrors the whole row at draw time.

use embedded_graphics::prelude::*;
use heapless::Vec;

use super::config::MAX_STARS;

/// Round half away from zero
#[inline]
pub(crate) fn round_to_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

/// Position of one star in widget-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarFrame {
    /// Horizontal center
    pub center_x: f32,
    /// Vertical center
    pub center_y: f32,
    /// Icon size
    pub size: Size,
}

impl StarFrame {
    /// Left edge
    pub fn min_x(&self) -> f32 {
        self.center_x - self.size.width as f32 / 2.0
    }

    /// Right edge
    pub fn max_x(&self) -> f32 {
        self.center_x + self.size.width as f32 / 2.0
    }

    /// Pixel position of the icon's top-left corner, relative to the widget
    pub fn top_left(&self) -> Point {
        Point::new(
            round_to_i32(self.min_x()),
            round_to_i32(self.center_y - self.size.height as f32 / 2.0),
        )
    }
}

/// Frames for every star, index 0 being the logically first star
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutGeometry {
    frames: Vec<StarFrame, MAX_STARS>,
}

impl LayoutGeometry {
    /// Lay out `star_count` icons of `icon_size` in a `container` sized box.
    ///
    /// `star_count` beyond [`MAX_STARS`] is truncated; the widget validates
    /// counts before they get here.
    pub fn compute(container: Size, icon_size: Size, star_count: usize) -> Self {
        let n = star_count.min(MAX_STARS);
        let mut frames = Vec::new();
        if n == 0 {
            return Self { frames };
        }

        let icon_width = icon_size.width as f32;
        let half_width = icon_width / 2.0;
        let distance =
            (container.width as f32 - icon_width * n as f32) / (n as f32 + 1.0) + half_width;
        let center_y = container.height as f32 / 2.0;

        for index in 0..n {
            let position = (index + 1) as f32;
            let frame = StarFrame {
                center_x: position * distance + half_width * index as f32,
                center_y,
                size: icon_size,
            };
            // Capacity is MAX_STARS and n never exceeds it
            frames.push(frame).ok();
        }

        Self { frames }
    }

    pub fn frames(&self) -> &[StarFrame] {
        &self.frames
    }

    pub fn get(&self, index: usize) -> Option<&StarFrame> {
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: Size = Size::new(20, 20);

    #[test]
    fn test_five_stars_even_spacing() {
        let geometry = LayoutGeometry::compute(Size::new(220, 40), ICON, 5);
        let centers: std::vec::Vec<f32> = geometry.frames().iter().map(|f| f.center_x).collect();

        assert_eq!(centers, [30.0, 70.0, 110.0, 150.0, 190.0]);
        assert_eq!(geometry.get(2).unwrap().min_x(), 100.0);
        assert_eq!(geometry.get(0).unwrap().center_y, 20.0);
        assert_eq!(geometry.get(0).unwrap().top_left(), Point::new(20, 10));
    }

    #[test]
    fn test_frames_do_not_overlap_and_are_symmetric() {
        for n in 1..=8usize {
            for extra in [0u32, 1, 17, 100] {
                let width = ICON.width * n as u32 + extra;
                let geometry = LayoutGeometry::compute(Size::new(width, 30), ICON, n);
                let frames = geometry.frames();
                assert_eq!(frames.len(), n);

                for pair in frames.windows(2) {
                    assert!(pair[1].center_x > pair[0].center_x);
                    assert!(pair[1].min_x() >= pair[0].max_x() - 1e-3);
                }

                let midpoint = width as f32 / 2.0;
                for (left, right) in frames.iter().zip(frames.iter().rev()) {
                    let left_offset = midpoint - left.center_x;
                    let right_offset = right.center_x - midpoint;
                    assert!((left_offset - right_offset).abs() < 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_narrow_container_overlaps_without_failing() {
        let geometry = LayoutGeometry::compute(Size::new(50, 20), ICON, 5);
        assert_eq!(geometry.len(), 5);
        let frames = geometry.frames();
        assert!(frames[1].min_x() < frames[0].max_x());
    }

    #[test]
    fn test_zero_stars_is_empty() {
        assert!(LayoutGeometry::compute(Size::new(100, 20), ICON, 0).is_empty());
    }
}
