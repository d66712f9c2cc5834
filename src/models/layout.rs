//! Lane layout (output) model.
//!
//! A layout pairs every input task with the lane it was given, in input
//! order, plus one warning per task that had to be clamped at the lane
//! ceiling.

use serde::{Deserialize, Serialize};

use super::{Span, Task};

/// Outcome of placing one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// A free lane below the ceiling was found.
    Placed(u32),
    /// No free lane below the ceiling; the task sits on the ceiling lane
    /// and may overlap other clamped tasks.
    Clamped(u32),
}

impl Placement {
    /// The lane index, regardless of outcome.
    #[inline]
    pub fn lane(&self) -> u32 {
        match *self {
            Placement::Placed(lane) | Placement::Clamped(lane) => lane,
        }
    }

    /// Whether the task was clamped at the ceiling.
    #[inline]
    pub fn is_clamped(&self) -> bool {
        matches!(self, Placement::Clamped(_))
    }
}

/// A task with its assigned lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneAssignment {
    /// The input task.
    pub task: Task,
    /// Lane placement within the task's resource.
    pub placement: Placement,
}

impl LaneAssignment {
    /// Creates a new assignment.
    pub fn new(task: Task, placement: Placement) -> Self {
        Self { task, placement }
    }

    /// Assigned lane.
    #[inline]
    pub fn lane(&self) -> u32 {
        self.placement.lane()
    }
}

/// Raised when a resource has more simultaneous tasks than the ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityWarning {
    /// Clamped task.
    pub task_id: String,
    /// Resource the task runs on.
    pub resource: String,
    /// The task's span.
    pub span: Span,
    /// Lane ceiling in effect.
    pub ceiling: u32,
}

impl DensityWarning {
    /// Human-readable description.
    pub fn message(&self) -> String {
        format!(
            "Task '{}' on '{}' [{}..={}] exceeds {} lanes and was clamped",
            self.task_id, self.resource, self.span.start, self.span.end, self.ceiling
        )
    }
}

/// Lane-annotated tasks, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaneLayout {
    assignments: Vec<LaneAssignment>,
    warnings: Vec<DensityWarning>,
}

impl LaneLayout {
    /// Creates a layout from assignments (in input order) and warnings.
    pub fn new(assignments: Vec<LaneAssignment>, warnings: Vec<DensityWarning>) -> Self {
        Self {
            assignments,
            warnings,
        }
    }

    /// All assignments, in input order.
    pub fn assignments(&self) -> &[LaneAssignment] {
        &self.assignments
    }

    /// Clamp warnings, one per clamped task.
    pub fn warnings(&self) -> &[DensityWarning] {
        &self.warnings
    }

    /// Whether every task found a lane below the ceiling.
    pub fn is_clamp_free(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the layout holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Finds the assignment of a task. First match wins for duplicate IDs.
    pub fn assignment_for_task(&self, task_id: &str) -> Option<&LaneAssignment> {
        self.assignments.iter().find(|a| a.task.id == task_id)
    }

    /// Lane of a task.
    pub fn lane_of(&self, task_id: &str) -> Option<u32> {
        self.assignment_for_task(task_id).map(LaneAssignment::lane)
    }

    /// Placement of a task.
    pub fn placement_of(&self, task_id: &str) -> Option<Placement> {
        self.assignment_for_task(task_id).map(|a| a.placement)
    }

    /// All assignments on a resource, in input order.
    pub fn assignments_for_resource(&self, resource: &str) -> Vec<&LaneAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.task.resource == resource)
            .collect()
    }

    /// Distinct resource keys in order of first appearance.
    pub fn resources(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for a in &self.assignments {
            let key = a.task.resource.as_str();
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen
    }

    /// Number of lanes a resource needs (highest lane + 1).
    ///
    /// Returns 0 for a resource with no tasks.
    pub fn lane_count(&self, resource: &str) -> u32 {
        self.assignments
            .iter()
            .filter(|a| a.task.resource == resource)
            .map(|a| a.lane() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Assignments of a resource grouped by lane: `rows[lane]`.
    ///
    /// Within a row, tasks keep input order. Lanes with no task are empty.
    pub fn rows(&self, resource: &str) -> Vec<Vec<&LaneAssignment>> {
        let mut rows: Vec<Vec<&LaneAssignment>> =
            vec![Vec::new(); self.lane_count(resource) as usize];
        for a in self.assignments_for_resource(resource) {
            rows[a.lane() as usize].push(a);
        }
        rows
    }
}
