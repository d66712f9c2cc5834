//! Inclusive time-unit spans.
//!
//! Timeline positions are integer unit indices (e.g. days since the
//! planning epoch). A span covers every unit from `start` to `end`,
//! both inclusive, so a one-day order has `start == end`.

use serde::{Deserialize, Serialize};

/// An inclusive interval `[start, end]` over discrete time units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// First covered unit (inclusive).
    pub start: i64,
    /// Last covered unit (inclusive).
    pub end: i64,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// A span covering exactly one unit.
    pub fn unit(at: i64) -> Self {
        Self { start: at, end: at }
    }

    /// Whether `start > end`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Number of covered units. Zero for an inverted span; saturates at
    /// `i64::MAX` for spans wider than that.
    #[inline]
    pub fn len(&self) -> i64 {
        if self.is_inverted() {
            0
        } else {
            self.end.saturating_sub(self.start).saturating_add(1)
        }
    }

    /// Whether the span covers no units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_inverted()
    }

    /// Whether a unit falls within this span.
    #[inline]
    pub fn contains(&self, unit: i64) -> bool {
        unit >= self.start && unit <= self.end
    }

    /// Whether two spans share at least one unit.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_inverted()
            && !other.is_inverted()
            && self.start <= other.end
            && other.start <= self.end
    }

    /// Iterates the covered units in ascending order.
    pub fn units(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(0, 3).len(), 4);
        assert_eq!(Span::unit(7).len(), 1);
        assert_eq!(Span::new(5, 4).len(), 0);
        assert!(Span::new(5, 4).is_empty());
    }

    #[test]
    fn test_widest_span_len_saturates() {
        assert_eq!(Span::new(i64::MIN, i64::MAX).len(), i64::MAX);
        assert_eq!(Span::new(0, i64::MAX).len(), i64::MAX);
        assert_eq!(Span::unit(i64::MIN).len(), 1);
    }

    #[test]
    fn test_span_overlap_is_inclusive() {
        let a = Span::new(0, 3);
        assert!(a.overlaps(&Span::new(3, 5))); // shared endpoint
        assert!(a.overlaps(&Span::new(1, 2))); // nested
        assert!(!a.overlaps(&Span::new(4, 6)));
        assert!(Span::new(4, 6).overlaps(&Span::unit(6)));
    }

    #[test]
    fn test_inverted_never_overlaps() {
        let inverted = Span::new(5, 2);
        assert!(!inverted.overlaps(&Span::new(0, 10)));
        assert_eq!(inverted.units().count(), 0);
    }

    #[test]
    fn test_contains_and_units() {
        let s = Span::new(-2, 1);
        assert!(s.contains(-2));
        assert!(s.contains(1));
        assert!(!s.contains(2));
        assert_eq!(s.units().collect::<Vec<_>>(), vec![-2, -1, 0, 1]);
    }
}
