//! Greedy first-fit lane assigner.
//!
//! # Algorithm
//!
//! 1. Partition tasks by resource key, keeping input order within each key.
//! 2. For each resource, walk its tasks in input order with a fresh
//!    occupancy map.
//! 3. Give each task the lowest lane below the ceiling that is free at
//!    every unit of its span, then claim that lane across the span.
//! 4. If no lane below the ceiling is free, clamp the task to the ceiling
//!    and record a density warning.
//!
//! Earlier tasks win low lanes. The result is deterministic for a given
//! input order.
//!
//! # Complexity
//! O(n * s * c) where n=tasks, s=span length in units, c=lane ceiling.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::OccupancyMap;
use crate::config::LaneConfig;
use crate::error::ConfigError;
use crate::models::{DensityWarning, LaneAssignment, LaneLayout, Placement, Span, Task};
use crate::validation::{validate_tasks, ValidationError};

/// Assigns overlapping tasks to stacked display lanes.
///
/// # Example
///
/// ```
/// use u_timeline::layout::LaneAssigner;
/// use u_timeline::models::Task;
///
/// let tasks = vec![
///     Task::new("A", "R1", 0, 3),
///     Task::new("B", "R1", 2, 5),
///     Task::new("C", "R1", 1, 4),
///     Task::new("D", "R1", 6, 8),
///     Task::new("E", "R1", 7, 9),
/// ];
///
/// let layout = LaneAssigner::new().assign(&tasks);
/// assert_eq!(layout.lane_of("A"), Some(0));
/// assert_eq!(layout.lane_of("B"), Some(1));
/// assert_eq!(layout.lane_of("C"), Some(2));
/// assert_eq!(layout.lane_of("D"), Some(0));
/// assert_eq!(layout.lane_of("E"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LaneAssigner {
    config: LaneConfig,
}

impl LaneAssigner {
    /// Creates an assigner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assigner with a validated configuration.
    pub fn with_config(config: LaneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &LaneConfig {
        &self.config
    }

    /// Lays out tasks into lanes.
    ///
    /// Never fails. A task that finds no lane below the ceiling is
    /// returned as [`Placement::Clamped`] with a matching
    /// [`DensityWarning`]. Inverted spans cover no units and land on lane 0.
    pub fn assign(&self, tasks: &[Task]) -> LaneLayout {
        let ceiling = self.config.max_lanes;
        let mut placements = vec![Placement::Placed(0); tasks.len()];
        let mut warnings = Vec::new();

        for (resource, indices) in group_by_resource(tasks) {
            let mut occupancy = OccupancyMap::new();

            for &idx in &indices {
                let task = &tasks[idx];
                let placement = place(&mut occupancy, task.span, ceiling);
                if placement.is_clamped() {
                    warn!(
                        task_id = %task.id,
                        resource,
                        start = task.span.start,
                        end = task.span.end,
                        ceiling,
                        "no free lane below ceiling, task clamped"
                    );
                    warnings.push(DensityWarning {
                        task_id: task.id.clone(),
                        resource: resource.to_string(),
                        span: task.span,
                        ceiling,
                    });
                }
                placements[idx] = placement;
            }

            debug!(
                resource,
                tasks = indices.len(),
                peak = occupancy.peak_depth(),
                "resource laid out"
            );
        }

        let assignments = tasks
            .iter()
            .cloned()
            .zip(placements)
            .map(|(task, placement)| LaneAssignment::new(task, placement))
            .collect();

        LaneLayout::new(assignments, warnings)
    }

    /// Validates tasks, then lays them out.
    ///
    /// # Returns
    /// The layout, or every validation error found.
    pub fn assign_checked(&self, tasks: &[Task]) -> Result<LaneLayout, Vec<ValidationError>> {
        validate_tasks(tasks, &self.config)?;
        Ok(self.assign(tasks))
    }
}

/// Finds the lowest free lane below `ceiling` and claims it across `span`.
///
/// A clamped task claims nothing, so the map only ever holds lanes below
/// the ceiling.
fn place(occupancy: &mut OccupancyMap, span: Span, ceiling: u32) -> Placement {
    match occupancy.first_free_lane(span, ceiling) {
        Some(lane) => {
            occupancy.claim(lane, span);
            Placement::Placed(lane)
        }
        None => Placement::Clamped(ceiling),
    }
}

/// Task indices per resource key, keys in order of first appearance.
fn group_by_resource(tasks: &[Task]) -> Vec<(&str, Vec<usize>)> {
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();

    for (idx, task) in tasks.iter().enumerate() {
        let key = task.resource.as_str();
        let pos = *slot.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[pos].1.push(idx);
    }

    groups
}
