//! Error types.

use thiserror::Error;

/// Invalid layout or time-scale configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The lane ceiling must allow at least one lane.
    #[error("lane ceiling must be at least 1")]
    ZeroLaneCeiling,

    /// The span limit must be positive when set.
    #[error("span limit must be positive, got {0}")]
    InvalidSpanLimit(i64),

    /// A time unit must be a positive number of milliseconds.
    #[error("time unit must be positive, got {0}ms")]
    InvalidTimeUnit(i64),
}
