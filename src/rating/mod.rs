//! Star rating widget
//!
//! - [`layout`]: evenly spaced star frames for a given width
//! - [`resolver`]: touch x coordinate to whole or half-star rating
//! - [`render`]: rating to per-star `Off`/`Half`/`On` states, renderer seam
//! - [`icon`]: bitmap and vector star icons with a named fallback catalog
//! - [`widget`]: the interactive widget tying it all together
//!
//! # Examples
//!
//! ```ignore
//! use starry_stars::rating::{LayoutDirection, RatingWidget};
//!
//! let mut widget = RatingWidget::builder()
//!     .with_bounds(Rectangle::new(Point::new(0, 100), Size::new(320, 40)))
//!     .with_layout_direction(LayoutDirection::RightToLeft)
//!     .with_listener(|_: &RatingWidget, rating: f32| log::info!("rated {}", rating))
//!     .build()?;
//!
//! widget.handle_touch(TouchEvent::Press(TouchPoint::new(40, 120)));
//! widget.handle_touch(TouchEvent::Release(TouchPoint::new(40, 120)));
//! widget.draw(&mut display)?;
//! ```

pub mod config;
pub mod error;
pub mod icon;
pub mod layout;
pub mod render;
pub mod resolver;
pub mod widget;

pub use config::{
    DEFAULT_STAR_COUNT, LayoutDirection, MAX_STARS, ReadingDirection, WidgetConfig,
};
pub use error::{ConfigError, ConfigResult};
pub use icon::{AssetCatalog, Bitmap, BundledAssets, Coverage, IconSet, StarGlyph, StarIcon};
pub use layout::{LayoutGeometry, StarFrame};
pub use render::{DisplayRenderer, StarRenderer, StarState, star_states};
pub use resolver::resolve_rating;
pub use widget::{Interaction, RatingListener, RatingWidget, RatingWidgetBuilder};
