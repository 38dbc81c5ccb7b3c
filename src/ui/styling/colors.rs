//! Color definitions and the star palette
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary background color - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

// ============================================================================
// Star Colors
// ============================================================================

/// Lit star fill - warm gold
pub const COLOR_STAR_LIT: Rgb565 = Rgb565::new(255 >> 3, 196 >> 2, 42 >> 3);

/// Unlit star fill - slate
pub const COLOR_STAR_UNLIT: Rgb565 = Rgb565::new(60 >> 3, 70 >> 2, 78 >> 3);

/// Star outline - pale gold
pub const COLOR_STAR_OUTLINE: Rgb565 = Rgb565::new(230 >> 3, 180 >> 2, 60 >> 3);

// ============================================================================
// Star Palette
// ============================================================================

/// Colors used by vector star glyphs.
///
/// ```ignore
/// let palette = StarPalette::default().with_lit(Rgb565::RED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPalette {
    /// Fill of the lit part of a star
    pub lit: Rgb565,

    /// Fill of the unlit part of a star
    pub unlit: Rgb565,

    /// One-pixel outline around every star
    pub outline: Rgb565,
}

impl Default for StarPalette {
    fn default() -> Self {
        Self {
            lit: COLOR_STAR_LIT,
            unlit: COLOR_STAR_UNLIT,
            outline: COLOR_STAR_OUTLINE,
        }
    }
}

impl StarPalette {
    pub fn with_lit(mut self, color: Rgb565) -> Self {
        self.lit = color;
        self
    }

    pub fn with_unlit(mut self, color: Rgb565) -> Self {
        self.unlit = color;
        self
    }

    pub fn with_outline(mut self, color: Rgb565) -> Self {
        self.outline = color;
        self
    }
}
