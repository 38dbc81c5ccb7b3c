//! Touch position to rating resolution

use super::layout::LayoutGeometry;

/// Resolve a widget-local, unmirrored x coordinate to a rating.
///
/// Stars are scanned from last to first. A touch at or right of a star's
/// center selects that star in full; a touch inside the star's left half
/// selects a half star when allowed, otherwise the scan moves on to the
/// previous star. Touches left of the first star resolve to zero.
pub fn resolve_rating(geometry: &LayoutGeometry, x: f32, half_stars_allowed: bool) -> f32 {
    for (index, frame) in geometry.frames().iter().enumerate().rev() {
        if x >= frame.center_x {
            return index as f32 + 1.0;
        } else if half_stars_allowed && x >= frame.min_x() {
            return index as f32 + 0.5;
        }
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::Size;

    /// Centers at 30, 70, 110, 150, 190 with 20px icons
    fn five_stars() -> LayoutGeometry {
        LayoutGeometry::compute(Size::new(220, 40), Size::new(20, 20), 5)
    }

    #[test]
    fn test_center_counts_as_full_star() {
        assert_eq!(resolve_rating(&five_stars(), 150.0, true), 4.0);
        assert_eq!(resolve_rating(&five_stars(), 150.0, false), 4.0);
    }

    #[test]
    fn test_left_half_gives_half_star() {
        assert_eq!(resolve_rating(&five_stars(), 105.0, true), 2.5);
        assert_eq!(resolve_rating(&five_stars(), 100.0, true), 2.5);
    }

    #[test]
    fn test_left_half_falls_through_without_half_stars() {
        assert_eq!(resolve_rating(&five_stars(), 105.0, false), 2.0);
        assert_eq!(resolve_rating(&five_stars(), 25.0, false), 0.0);
    }

    #[test]
    fn test_gap_between_stars_resolves_to_previous() {
        // Between star 2's right edge (80) and star 3's left edge (100)
        assert_eq!(resolve_rating(&five_stars(), 90.0, true), 2.0);
    }

    #[test]
    fn test_saturates_at_both_ends() {
        assert_eq!(resolve_rating(&five_stars(), 500.0, true), 5.0);
        assert_eq!(resolve_rating(&five_stars(), 19.0, true), 0.0);
        assert_eq!(resolve_rating(&five_stars(), -40.0, true), 0.0);
    }

    #[test]
    fn test_empty_geometry_resolves_to_zero() {
        assert_eq!(resolve_rating(&LayoutGeometry::default(), 100.0, true), 0.0);
    }
}
