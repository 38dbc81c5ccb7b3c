//! Interactive star rating widget
//!
//! [`RatingWidget`] owns its configuration, the current rating, the derived
//! star states and the star layout. It implements the crate's [`Drawable`]
//! and [`Touchable`] traits so a host can place it on a page like any other
//! component.
//!
//! # Interaction
//!
//! ```text
//! Idle --Press inside--> Tracking --Drag--> Tracking
//!   ^                       |
//!   +------ Release --------+  (resolve, then notify listener)
//!   +------ Cancel ---------+  (revert to rating held at Press)
//! ```
//!
//! Non-editable widgets ignore every touch event.

use alloc::boxed::Box;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use log::{debug, trace};

use super::config::{
    LayoutDirection, MAX_STARS, ReadingDirection, WidgetConfig, validate_star_count,
};
use super::error::ConfigResult;
use super::icon::{AssetCatalog, BundledAssets, IconSet, StarIcon};
use super::layout::LayoutGeometry;
use super::render::{DisplayRenderer, StarRenderer, StarState, star_states};
use super::resolver::resolve_rating;
use crate::ui::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};

/// Observer notified once per completed interaction.
///
/// Closures taking `(&RatingWidget, f32)` are listeners too.
pub trait RatingListener {
    fn on_rating_changed(&mut self, widget: &RatingWidget, rating: f32);
}

impl<F> RatingListener for F
where
    F: FnMut(&RatingWidget, f32),
{
    fn on_rating_changed(&mut self, widget: &RatingWidget, rating: f32) {
        self(widget, rating)
    }
}

/// Touch interaction state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Idle,
    /// A finger is down; `initial_rating` is restored on cancel
    Tracking { initial_rating: f32 },
}

/// Clamp a rating into `[0, star_count]`, mapping NaN to zero
fn clamp_rating(rating: f32, star_count: usize) -> f32 {
    if rating.is_nan() {
        return 0.0;
    }
    rating.clamp(0.0, star_count as f32)
}

/// Row of stars that the user can rate by touch
pub struct RatingWidget {
    config: WidgetConfig,
    icons: IconSet,
    bounds: Rectangle,
    geometry: LayoutGeometry,
    rating: f32,
    states: Vec<StarState, MAX_STARS>,
    interaction: Interaction,
    listener: Option<Box<dyn RatingListener>>,
    dirty: bool,
}

impl RatingWidget {
    /// Create a widget with default settings and bundled star glyphs.
    pub fn new(bounds: Rectangle) -> Self {
        Self::from_parts(WidgetConfig::default(), IconSet::default(), bounds, 0.0, None)
    }

    /// Start configuring a widget
    pub fn builder<'a>() -> RatingWidgetBuilder<'a> {
        RatingWidgetBuilder::new()
    }

    fn from_parts(
        config: WidgetConfig,
        icons: IconSet,
        bounds: Rectangle,
        rating: f32,
        listener: Option<Box<dyn RatingListener>>,
    ) -> Self {
        let rating = clamp_rating(rating, config.star_count);
        let mut widget = Self {
            config,
            icons,
            bounds,
            geometry: LayoutGeometry::default(),
            rating,
            states: star_states(rating, config.star_count, config.half_stars_allowed),
            interaction: Interaction::Idle,
            listener,
            dirty: true,
        };
        widget.layout();
        widget
    }

    pub fn id(&self) -> u16 {
        self.config.id
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.interaction, Interaction::Tracking { .. })
    }

    /// Current rating
    pub fn rating(&self) -> f32 {
        self.rating
    }

    /// Visual state of every star, first star first
    pub fn star_states(&self) -> &[StarState] {
        &self.states
    }

    /// Set the rating programmatically.
    ///
    /// Values are clamped to `[0, star_count]`. The listener is not notified.
    ///
    /// During a touch the value only lasts until the next drag or release
    /// resolves a new one, and a cancelled touch restores the rating held
    /// when the press began.
    pub fn set_rating(&mut self, rating: f32) {
        self.apply_rating(rating);
    }

    /// Update the bounds and recompute the star layout
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.layout();
            self.dirty = true;
        }
    }

    /// Change the number of stars, re-laying out and re-clamping the rating
    pub fn set_star_count(&mut self, star_count: usize) -> ConfigResult<()> {
        let star_count = validate_star_count(star_count)?;
        if star_count == self.config.star_count {
            return Ok(());
        }

        self.cancel_tracking();
        self.config.star_count = star_count;
        self.layout();
        let rating = self.rating;
        self.apply_rating(rating);
        self.dirty = true;
        Ok(())
    }

    pub fn set_half_stars_allowed(&mut self, allowed: bool) {
        self.config.half_stars_allowed = allowed;
        self.refresh_states();
    }

    /// Enable or disable touch editing. Disabling cancels a running interaction.
    pub fn set_editable(&mut self, editable: bool) {
        if !editable {
            self.cancel_tracking();
        }
        self.config.editable = editable;
    }

    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        if self.config.layout_direction != direction {
            self.config.layout_direction = direction;
            self.dirty = true;
        }
    }

    /// Reading direction of the host environment, used by `Automatic`
    pub fn set_environment_direction(&mut self, direction: ReadingDirection) {
        if self.config.environment_direction != direction {
            self.config.environment_direction = direction;
            self.dirty = true;
        }
    }

    /// Replace the icons; the layout follows the new off icon's size
    pub fn set_icons(&mut self, icons: IconSet) {
        self.icons = icons;
        self.layout();
        self.dirty = true;
    }

    pub fn set_listener<L: RatingListener + 'static>(&mut self, listener: L) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Call `renderer` once per star with its visual state.
    ///
    /// Does nothing while the widget has no layout (zero-sized bounds).
    pub fn render<R: StarRenderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        if self.geometry.is_empty() {
            trace!("Rating widget {} has no layout, skipping render", self.config.id);
            return Ok(());
        }

        for (index, state) in self.states.iter().enumerate() {
            renderer.render_star(index, *state)?;
        }
        Ok(())
    }

    fn layout(&mut self) {
        self.geometry = if self.bounds.size.width == 0 || self.bounds.size.height == 0 {
            LayoutGeometry::default()
        } else {
            LayoutGeometry::compute(
                self.bounds.size,
                self.icons.frame_size(),
                self.config.star_count,
            )
        };
    }

    fn apply_rating(&mut self, rating: f32) {
        let clamped = clamp_rating(rating, self.config.star_count);
        if clamped != rating {
            debug!("Rating {} clamped to {}", rating, clamped);
        }
        if clamped != self.rating {
            self.rating = clamped;
            self.dirty = true;
        }
        self.refresh_states();
    }

    fn refresh_states(&mut self) {
        let states = star_states(
            self.rating,
            self.config.star_count,
            self.config.half_stars_allowed,
        );
        if states != self.states {
            self.states = states;
            self.dirty = true;
        }
    }

    /// Convert a screen x coordinate to the unmirrored widget-local space
    fn local_x(&self, point: TouchPoint) -> f32 {
        let local = point.x as i32 - self.bounds.top_left.x;
        let local = match self.config.direction() {
            ReadingDirection::LeftToRight => local,
            ReadingDirection::RightToLeft => self.bounds.size.width as i32 - 1 - local,
        };
        local as f32
    }

    fn track(&mut self, point: TouchPoint) {
        if self.geometry.is_empty() {
            return;
        }
        let rating = resolve_rating(
            &self.geometry,
            self.local_x(point),
            self.config.half_stars_allowed,
        );
        trace!("Touch at x={} resolved to {}", point.x, rating);
        self.apply_rating(rating);
    }

    fn cancel_tracking(&mut self) {
        if let Interaction::Tracking { initial_rating } = self.interaction {
            debug!("Rating interaction cancelled, restoring {}", initial_rating);
            self.interaction = Interaction::Idle;
            self.apply_rating(initial_rating);
        }
    }

    fn notify(&mut self) {
        let rating = self.rating;
        if let Some(mut listener) = self.listener.take() {
            listener.on_rating_changed(self, rating);
            self.listener = Some(listener);
        }
    }
}

impl Drawable for RatingWidget {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let mut renderer = DisplayRenderer::new(
            display,
            &self.geometry,
            &self.icons,
            self.bounds,
            self.config.direction(),
        );
        self.render(&mut renderer)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for RatingWidget {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        if !self.config.editable {
            return TouchResult::NotHandled;
        }

        match (event, self.interaction) {
            (TouchEvent::Press(point), Interaction::Idle) => {
                if !self.contains_point(point) || self.geometry.is_empty() {
                    return TouchResult::NotHandled;
                }
                self.interaction = Interaction::Tracking {
                    initial_rating: self.rating,
                };
                self.track(point);
                TouchResult::Handled
            }
            (TouchEvent::Press(point), Interaction::Tracking { .. })
            | (TouchEvent::Drag(point), Interaction::Tracking { .. }) => {
                self.track(point);
                TouchResult::Handled
            }
            (TouchEvent::Release(point), Interaction::Tracking { .. }) => {
                self.track(point);
                self.interaction = Interaction::Idle;
                debug!(
                    "Rating widget {} changed to {}",
                    self.config.id, self.rating
                );
                self.notify();
                TouchResult::RatingChanged(self.rating)
            }
            (TouchEvent::Cancel, Interaction::Tracking { .. }) => {
                self.cancel_tracking();
                TouchResult::Handled
            }
            _ => TouchResult::NotHandled,
        }
    }
}

/// Builder for [`RatingWidget`].
///
/// Icons that are not supplied are looked up by name (`off`, `on`, `half`)
/// in the asset catalog, [`BundledAssets`] unless another one is given.
///
/// ```ignore
/// let widget = RatingWidget::builder()
///     .with_bounds(Rectangle::new(Point::new(0, 100), Size::new(320, 40)))
///     .with_star_count(5)
///     .with_half_stars_allowed(false)
///     .with_listener(|w: &RatingWidget, rating: f32| info!("{} -> {}", w.id(), rating))
///     .build()?;
/// ```
pub struct RatingWidgetBuilder<'a> {
    config: WidgetConfig,
    off_icon: Option<StarIcon>,
    on_icon: Option<StarIcon>,
    half_icon: Option<StarIcon>,
    assets: Option<&'a dyn AssetCatalog>,
    bounds: Rectangle,
    rating: f32,
    listener: Option<Box<dyn RatingListener>>,
}

impl Default for RatingWidgetBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RatingWidgetBuilder<'a> {
    pub fn new() -> Self {
        Self {
            config: WidgetConfig::default(),
            off_icon: None,
            on_icon: None,
            half_icon: None,
            assets: None,
            bounds: Rectangle::zero(),
            rating: 0.0,
            listener: None,
        }
    }

    /// Apply a whole set of non-icon settings at once
    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_star_count(mut self, star_count: usize) -> Self {
        self.config.star_count = star_count;
        self
    }

    pub fn with_off_icon(mut self, icon: StarIcon) -> Self {
        self.off_icon = Some(icon);
        self
    }

    pub fn with_on_icon(mut self, icon: StarIcon) -> Self {
        self.on_icon = Some(icon);
        self
    }

    pub fn with_half_icon(mut self, icon: StarIcon) -> Self {
        self.half_icon = Some(icon);
        self
    }

    /// Catalog used for icons that were not supplied
    pub fn with_assets(mut self, assets: &'a dyn AssetCatalog) -> Self {
        self.assets = Some(assets);
        self
    }

    pub fn with_half_stars_allowed(mut self, allowed: bool) -> Self {
        self.config.half_stars_allowed = allowed;
        self
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.config.editable = editable;
        self
    }

    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.config.layout_direction = direction;
        self
    }

    pub fn with_environment_direction(mut self, direction: ReadingDirection) -> Self {
        self.config.environment_direction = direction;
        self
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.config.id = id;
        self
    }

    /// Widget bounds; without them the widget has no layout until `set_bounds`
    pub fn with_bounds(mut self, bounds: Rectangle) -> Self {
        self.bounds = bounds;
        self
    }

    /// Initial rating, clamped like [`RatingWidget::set_rating`]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_listener<L: RatingListener + 'static>(mut self, listener: L) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Validate the configuration and create the widget
    pub fn build(self) -> ConfigResult<RatingWidget> {
        validate_star_count(self.config.star_count)?;

        let bundled = BundledAssets::default();
        let catalog: &dyn AssetCatalog = match self.assets {
            Some(assets) => assets,
            None => &bundled,
        };
        let icons = IconSet::resolve(self.off_icon, self.on_icon, self.half_icon, catalog)?;

        Ok(RatingWidget::from_parts(
            self.config,
            icons,
            self.bounds,
            self.rating,
            self.listener,
        ))
    }
}
