//! Lane layout configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default lane ceiling per resource.
pub const DEFAULT_MAX_LANES: u32 = 10;

/// Settings for the lane assigner and input validation.
///
/// Deserializes with defaults for missing fields, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneConfig {
    /// Lane ceiling per resource. Tasks that find no free lane below it
    /// are clamped to this value.
    pub max_lanes: u32,
    /// Longest accepted task span in units. `None` = unlimited.
    pub max_span_units: Option<i64>,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            max_lanes: DEFAULT_MAX_LANES,
            max_span_units: None,
        }
    }
}

impl LaneConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lane ceiling.
    pub fn with_max_lanes(mut self, max_lanes: u32) -> Self {
        self.max_lanes = max_lanes;
        self
    }

    /// Sets the span limit checked by validation.
    pub fn with_max_span_units(mut self, units: i64) -> Self {
        self.max_span_units = Some(units);
        self
    }

    /// Checks the configuration for values the assigner cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lanes == 0 {
            return Err(ConfigError::ZeroLaneCeiling);
        }
        match self.max_span_units {
            Some(limit) if limit <= 0 => Err(ConfigError::InvalidSpanLimit(limit)),
            _ => Ok(()),
        }
    }
}
