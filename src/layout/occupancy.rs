//! Per-resource lane occupancy.

use std::collections::{HashMap, HashSet};

use crate::models::Span;

/// Lanes already claimed at each time unit of one resource.
///
/// Built fresh for every resource during a layout pass and dropped
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct OccupancyMap {
    claimed: HashMap<i64, HashSet<u32>>,
}

impl OccupancyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `lane` is unclaimed at every unit of `span`.
    ///
    /// Vacuously true for an inverted span.
    pub fn is_free(&self, lane: u32, span: Span) -> bool {
        span.units().all(|unit| {
            self.claimed
                .get(&unit)
                .map_or(true, |lanes| !lanes.contains(&lane))
        })
    }

    /// Marks `lane` as claimed for every unit of `span`.
    pub fn claim(&mut self, lane: u32, span: Span) {
        for unit in span.units() {
            self.claimed.entry(unit).or_default().insert(lane);
        }
    }

    /// Lowest lane below `ceiling` that is free across `span`.
    pub fn first_free_lane(&self, span: Span, ceiling: u32) -> Option<u32> {
        (0..ceiling).find(|&lane| self.is_free(lane, span))
    }

    /// Largest number of lanes claimed at any single unit.
    pub fn peak_depth(&self) -> usize {
        self.claimed.values().map(HashSet::len).max().unwrap_or(0)
    }

    /// Whether nothing has been claimed.
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_is_free() {
        let map = OccupancyMap::new();
        assert!(map.is_empty());
        assert!(map.is_free(0, Span::new(0, 100)));
        assert_eq!(map.first_free_lane(Span::new(0, 5), 10), Some(0));
        assert_eq!(map.peak_depth(), 0);
    }

    #[test]
    fn test_claim_blocks_overlap_only() {
        let mut map = OccupancyMap::new();
        map.claim(0, Span::new(2, 4));

        assert!(!map.is_free(0, Span::new(4, 6))); // touches unit 4
        assert!(map.is_free(0, Span::new(5, 6)));
        assert!(map.is_free(1, Span::new(2, 4)));
        assert_eq!(map.first_free_lane(Span::new(0, 2), 10), Some(1));
    }

    #[test]
    fn test_first_free_lane_respects_ceiling() {
        let mut map = OccupancyMap::new();
        map.claim(0, Span::unit(3));
        map.claim(1, Span::unit(3));

        assert_eq!(map.first_free_lane(Span::unit(3), 2), None);
        assert_eq!(map.first_free_lane(Span::unit(3), 3), Some(2));
    }

    #[test]
    fn test_gap_lane_is_reused() {
        let mut map = OccupancyMap::new();
        map.claim(0, Span::new(0, 10));
        map.claim(1, Span::new(0, 2));
        map.claim(2, Span::new(0, 10));
        // Lane 1 is free again from unit 3
        assert_eq!(map.first_free_lane(Span::new(3, 8), 10), Some(1));
    }

    #[test]
    fn test_peak_depth() {
        let mut map = OccupancyMap::new();
        map.claim(0, Span::new(0, 5));
        map.claim(1, Span::new(3, 4));
        map.claim(2, Span::unit(4));
        assert_eq!(map.peak_depth(), 3);
    }

    #[test]
    fn test_inverted_span_claims_nothing() {
        let mut map = OccupancyMap::new();
        map.claim(0, Span::new(5, 1));
        assert!(map.is_empty());
        assert!(map.is_free(0, Span::new(5, 1)));
    }
}
