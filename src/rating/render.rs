//! Rating to star-state mapping and the renderer seam

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use super::config::{MAX_STARS, ReadingDirection};
use super::icon::IconSet;
use super::layout::LayoutGeometry;
use crate::ui::Mirrored;

/// Visual state of a single star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarState {
    Off,
    Half,
    On,
}

/// Per-star states for a rating.
///
/// The first `floor(rating)` stars are `On`. If the remainder is at least
/// one half and half stars are allowed the next star is `Half`. Everything
/// after that is `Off`. `rating` is expected to be clamped to
/// `[0, star_count]` already.
pub fn star_states(
    rating: f32,
    star_count: usize,
    half_stars_allowed: bool,
) -> Vec<StarState, MAX_STARS> {
    let n = star_count.min(MAX_STARS);
    // Truncation is floor here since the rating is non-negative
    let full = (rating.max(0.0) as usize).min(n);
    let half = half_stars_allowed && full < n && rating - full as f32 >= 0.5;

    let mut states = Vec::new();
    for index in 0..n {
        let state = if index < full {
            StarState::On
        } else if index == full && half {
            StarState::Half
        } else {
            StarState::Off
        };
        states.push(state).ok();
    }
    states
}

/// Rendering capability called once per star with its visual state.
///
/// The widget never depends on a specific backend; [`DisplayRenderer`] draws
/// into an `embedded-graphics` target, tests record the calls.
pub trait StarRenderer {
    type Error;

    fn render_star(&mut self, index: usize, state: StarState) -> Result<(), Self::Error>;
}

/// Renders stars into a `DrawTarget`, mirroring the row for right-to-left.
pub struct DisplayRenderer<'a, D> {
    target: &'a mut D,
    geometry: &'a LayoutGeometry,
    icons: &'a IconSet,
    bounds: Rectangle,
    direction: ReadingDirection,
}

impl<'a, D> DisplayRenderer<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(
        target: &'a mut D,
        geometry: &'a LayoutGeometry,
        icons: &'a IconSet,
        bounds: Rectangle,
        direction: ReadingDirection,
    ) -> Self {
        Self {
            target,
            geometry,
            icons,
            bounds,
            direction,
        }
    }
}

impl<D> StarRenderer for DisplayRenderer<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn render_star(&mut self, index: usize, state: StarState) -> Result<(), Self::Error> {
        let Some(frame) = self.geometry.get(index) else {
            return Ok(());
        };

        let icon = self.icons.for_state(state);
        let top_left = self.bounds.top_left + frame.top_left();

        match self.direction {
            ReadingDirection::LeftToRight => icon.draw(top_left, &mut *self.target),
            ReadingDirection::RightToLeft => {
                let mut mirrored = Mirrored::new(&mut *self.target, self.bounds);
                icon.draw(top_left, &mut mirrored)
            }
        }
    }
}
