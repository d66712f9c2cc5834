//! Layout density metrics.
//!
//! Summarizes how crowded each resource's timeline is once tasks have
//! been stacked into lanes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Lane count | Highest lane used + 1 |
//! | Peak concurrency | Most tasks covering a single unit |
//! | Busy units | Units covered by at least one task |
//! | Clamped | Tasks that hit the lane ceiling |

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::LaneLayout;

/// Density metrics for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStats {
    /// Number of tasks on the resource.
    pub task_count: usize,
    /// Lanes needed to draw the resource.
    pub lane_count: u32,
    /// Largest number of tasks covering one unit.
    pub peak_concurrency: usize,
    /// Units covered by at least one task.
    pub busy_units: usize,
    /// Tasks clamped at the ceiling.
    pub clamped: usize,
}

/// Density metrics for a whole layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Total tasks.
    pub total_tasks: usize,
    /// Total clamped tasks.
    pub total_clamped: usize,
    /// Largest lane count of any resource.
    pub max_lane_count: u32,
    /// Per-resource metrics.
    pub by_resource: HashMap<String, ResourceStats>,
}

impl LayoutStats {
    /// Computes metrics from a finished layout.
    pub fn calculate(layout: &LaneLayout) -> Self {
        let mut by_resource = HashMap::new();

        for resource in layout.resources() {
            let assignments = layout.assignments_for_resource(resource);

            // unit -> number of covering tasks
            let mut coverage: BTreeMap<i64, usize> = BTreeMap::new();
            for a in &assignments {
                for unit in a.task.span.units() {
                    *coverage.entry(unit).or_insert(0) += 1;
                }
            }

            let stats = ResourceStats {
                task_count: assignments.len(),
                lane_count: layout.lane_count(resource),
                peak_concurrency: coverage.values().copied().max().unwrap_or(0),
                busy_units: coverage.len(),
                clamped: assignments
                    .iter()
                    .filter(|a| a.placement.is_clamped())
                    .count(),
            };
            by_resource.insert(resource.to_string(), stats);
        }

        Self {
            total_tasks: layout.len(),
            total_clamped: layout.warnings().len(),
            max_lane_count: by_resource
                .values()
                .map(|s| s.lane_count)
                .max()
                .unwrap_or(0),
            by_resource,
        }
    }

    /// Whether any resource needs more than `threshold` lanes.
    pub fn is_dense(&self, threshold: u32) -> bool {
        self.max_lane_count > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaneConfig;
    use crate::layout::LaneAssigner;
    use crate::models::Task;

    #[test]
    fn test_stats_basic() {
        let tasks = vec![
            Task::new("A", "L1", 0, 3),
            Task::new("B", "L1", 2, 5),
            Task::new("C", "L1", 1, 4),
            Task::new("D", "L2", 10, 10),
        ];
        let layout = LaneAssigner::new().assign(&tasks);
        let stats = LayoutStats::calculate(&layout);

        assert_eq!(stats.total_tasks, 4);
        assert_eq!(stats.total_clamped, 0);
        assert_eq!(stats.max_lane_count, 3);

        let l1 = &stats.by_resource["L1"];
        assert_eq!(l1.task_count, 3);
        assert_eq!(l1.lane_count, 3);
        assert_eq!(l1.peak_concurrency, 3); // units 2..=3
        assert_eq!(l1.busy_units, 6); // 0..=5

        let l2 = &stats.by_resource["L2"];
        assert_eq!(l2.lane_count, 1);
        assert_eq!(l2.busy_units, 1);
    }

    #[test]
    fn test_stats_gap_not_busy() {
        let tasks = vec![Task::new("A", "L1", 0, 1), Task::new("B", "L1", 5, 6)];
        let stats = LayoutStats::calculate(&LaneAssigner::new().assign(&tasks));
        assert_eq!(stats.by_resource["L1"].busy_units, 4);
        assert_eq!(stats.by_resource["L1"].peak_concurrency, 1);
    }

    #[test]
    fn test_stats_clamped() {
        let assigner = LaneAssigner::with_config(LaneConfig::new().with_max_lanes(2)).unwrap();
        let tasks: Vec<Task> = (0..4)
            .map(|i| Task::new(format!("T{i}"), "L1", 0, 2))
            .collect();
        let stats = LayoutStats::calculate(&assigner.assign(&tasks));

        assert_eq!(stats.total_clamped, 2);
        assert_eq!(stats.by_resource["L1"].clamped, 2);
        // Clamped tasks sit on lane 2 → 3 rows to draw
        assert_eq!(stats.by_resource["L1"].lane_count, 3);
        assert_eq!(stats.by_resource["L1"].peak_concurrency, 4);
        assert!(stats.is_dense(2));
        assert!(!stats.is_dense(3));
    }

    #[test]
    fn test_stats_empty() {
        let stats = LayoutStats::calculate(&LaneLayout::default());
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.max_lane_count, 0);
        assert!(stats.by_resource.is_empty());
        assert!(!stats.is_dense(0));
    }
}
