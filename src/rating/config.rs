//! Widget settings and layout direction

use super::error::{ConfigError, ConfigResult};

/// Star count used when none is configured
pub const DEFAULT_STAR_COUNT: usize = 5;

/// Capacity of the fixed-size star geometry
pub const MAX_STARS: usize = 32;

/// Concrete reading direction of a row of stars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingDirection {
    /// Star index 0 is leftmost
    #[default]
    LeftToRight,
    /// Star index 0 is rightmost
    RightToLeft,
}

/// Requested layout direction.
///
/// `Automatic` follows the host environment's reading direction, which the
/// host supplies through [`WidgetConfig::environment_direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Automatic,
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    /// Resolve against the environment's natural reading direction
    pub fn resolve(self, environment: ReadingDirection) -> ReadingDirection {
        match self {
            LayoutDirection::Automatic => environment,
            LayoutDirection::LeftToRight => ReadingDirection::LeftToRight,
            LayoutDirection::RightToLeft => ReadingDirection::RightToLeft,
        }
    }
}

/// Non-icon configuration of a rating widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetConfig {
    /// Total number of stars, between 1 and [`MAX_STARS`]
    pub star_count: usize,
    /// Whether touches may produce half-star ratings
    pub half_stars_allowed: bool,
    /// Whether touches change the rating at all
    pub editable: bool,
    pub layout_direction: LayoutDirection,
    /// Reading direction of the surrounding UI, used by `Automatic`
    pub environment_direction: ReadingDirection,
    /// Identifier handed back to listeners
    pub id: u16,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            half_stars_allowed: true,
            editable: true,
            layout_direction: LayoutDirection::Automatic,
            environment_direction: ReadingDirection::LeftToRight,
            id: 0,
        }
    }
}

impl WidgetConfig {
    /// Effective reading direction of the star row
    pub fn direction(&self) -> ReadingDirection {
        self.layout_direction.resolve(self.environment_direction)
    }
}

/// Check that a star count fits `1..=MAX_STARS`
pub(crate) fn validate_star_count(count: usize) -> ConfigResult<usize> {
    if count == 0 {
        return Err(ConfigError::InvalidStarCount { count });
    }
    if count > MAX_STARS {
        return Err(ConfigError::TooManyStars {
            count,
            max: MAX_STARS,
        });
    }
    Ok(count)
}
