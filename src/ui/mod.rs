// src/ui/mod.rs
//! UI building blocks shared by the rating widget
//!
//! This module provides:
//! - Core traits for drawable and touchable elements
//! - Touch event and result types
//! - A mirroring draw target for right-to-left rendering
//! - Star colors

pub mod core;
pub mod mirror;
pub mod styling;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use self::core::{DirtyRegion, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
pub use mirror::Mirrored;
