//! Styling for star icons
//!
//! Colors are RGB565 to match the 16-bit displays the widget targets.

pub mod colors;

pub use colors::{COLOR_BACKGROUND, StarPalette};
