//! Timeline task model.
//!
//! A task is one block on a resource's timeline: a production order
//! running on a sewing line, a job on a machine. Positions are inclusive
//! unit indices produced by the caller (see [`TimeScale`]).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Span;
use crate::timeline::TimeScale;

/// A time-bounded task on a shared resource.
///
/// Tasks are immutable input to the lane assigner; the assigned lane is
/// returned separately in a [`LaneLayout`](super::LaneLayout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Resource the task occupies (production line, machine).
    pub resource: String,
    /// Covered time units (inclusive on both ends).
    pub span: Span,
    /// Display name.
    pub name: String,
    /// Domain-specific key-value metadata (buyer, style, order number).
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl Task {
    /// Creates a task covering `[start, end]` on `resource`.
    pub fn new(id: impl Into<String>, resource: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            resource: resource.into(),
            span: Span::new(start, end),
            name: String::new(),
            attributes: HashMap::new(),
        }
    }

    /// Creates a task from a half-open millisecond window `[start_ms, end_ms)`.
    pub fn from_window(
        id: impl Into<String>,
        resource: impl Into<String>,
        scale: &TimeScale,
        start_ms: i64,
        end_ms: i64,
    ) -> Self {
        let span = scale.span_of(start_ms, end_ms);
        Self::new(id, resource, span.start, span.end)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// First covered unit.
    #[inline]
    pub fn start(&self) -> i64 {
        self.span.start
    }

    /// Last covered unit.
    #[inline]
    pub fn end(&self) -> i64 {
        self.span.end
    }

    /// Whether two tasks on the same resource overlap in time.
    ///
    /// Tasks on different resources never conflict.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.resource == other.resource && self.span.overlaps(&other.span)
    }
}
