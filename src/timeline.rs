//! Discretization of scheduling times into timeline units.
//!
//! Scheduling data carries millisecond timestamps relative to an epoch
//! (shift start, midnight UTC, season start). The timeline view works on
//! integer units, typically days. A half-open window `[start_ms, end_ms)`
//! becomes the inclusive unit span that covers it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Span;

/// One hour in milliseconds.
pub const HOUR_MS: i64 = 3_600_000;
/// One day in milliseconds.
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Mapping from milliseconds to timeline unit indices.
///
/// Deserialization goes through [`TimeScale::new`], so a stored scale
/// with a non-positive unit is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeScale")]
pub struct TimeScale {
    epoch_ms: i64,
    unit_ms: i64,
}

#[derive(Deserialize)]
struct RawTimeScale {
    epoch_ms: i64,
    unit_ms: i64,
}

impl TryFrom<RawTimeScale> for TimeScale {
    type Error = ConfigError;

    fn try_from(raw: RawTimeScale) -> Result<Self, Self::Error> {
        Self::new(raw.epoch_ms, raw.unit_ms)
    }
}

impl TimeScale {
    /// Creates a time scale with unit 0 starting at `epoch_ms`.
    ///
    /// # Errors
    /// [`ConfigError::InvalidTimeUnit`] if `unit_ms <= 0`.
    pub fn new(epoch_ms: i64, unit_ms: i64) -> Result<Self, ConfigError> {
        if unit_ms <= 0 {
            return Err(ConfigError::InvalidTimeUnit(unit_ms));
        }
        Ok(Self { epoch_ms, unit_ms })
    }

    /// A day-granular scale starting at `epoch_ms`.
    pub fn daily(epoch_ms: i64) -> Self {
        Self {
            epoch_ms,
            unit_ms: DAY_MS,
        }
    }

    /// Epoch (ms) of unit 0.
    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    /// Width of one unit (ms).
    pub fn unit_ms(&self) -> i64 {
        self.unit_ms
    }

    /// Unit index containing `time_ms`. Floors toward negative infinity.
    ///
    /// Offsets beyond the `i64` range saturate.
    pub fn unit_of(&self, time_ms: i64) -> i64 {
        time_ms
            .saturating_sub(self.epoch_ms)
            .div_euclid(self.unit_ms)
    }

    /// Start (ms) of a unit, saturating at the `i64` bounds.
    pub fn unit_start_ms(&self, unit: i64) -> i64 {
        self.epoch_ms
            .saturating_add(unit.saturating_mul(self.unit_ms))
    }

    /// Inclusive unit span covering the half-open window `[start_ms, end_ms)`.
    ///
    /// An empty or reversed window maps to the single unit of `start_ms`.
    pub fn span_of(&self, start_ms: i64, end_ms: i64) -> Span {
        let start = self.unit_of(start_ms);
        if end_ms <= start_ms {
            return Span::unit(start);
        }
        Span::new(start, self.unit_of(end_ms - 1))
    }
}
