//! Configuration errors for the rating widget

use thiserror_no_std::Error;

/// Error types for widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An icon was not supplied and the asset catalog has no fallback for it
    #[error("Missing star icon: {name}")]
    MissingIcon {
        /// Asset name that was looked up (`off`, `on` or `half`)
        name: &'static str,
    },

    /// Star count must be at least one
    #[error("Invalid star count: {count}")]
    InvalidStarCount {
        /// The rejected count
        count: usize,
    },

    /// Star count exceeds the fixed geometry capacity
    #[error("Too many stars: {count} (max: {max})")]
    TooManyStars {
        /// The rejected count
        count: usize,
        /// Maximum supported star count
        max: usize,
    },
}

/// Result type for widget configuration
pub type ConfigResult<T> = Result<T, ConfigError>;
