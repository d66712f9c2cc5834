//! Input validation for timeline layout.
//!
//! The lane assigner accepts any input and never fails. These checks let
//! callers reject malformed task lists before layout instead of getting
//! a silently odd picture. Detects:
//! - Empty or duplicate task IDs
//! - Empty resource keys
//! - Inverted spans (`start > end`)
//! - Spans longer than the configured limit
//!
//! All problems are collected; validation does not stop at the first one.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::LaneConfig;
use crate::models::Task;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task has an empty ID.
    MissingId,
    /// A task has an empty resource key.
    MissingResource,
    /// A task ends before it starts.
    InvertedSpan,
    /// A task spans more units than allowed.
    SpanTooLong,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates tasks before layout.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task], config: &LaneConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for task in tasks {
        if task.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                format!("Task on resource '{}' has an empty ID", task.resource),
            ));
        } else if !ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.resource.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingResource,
                format!("Task '{}' has no resource key", task.id),
            ));
        }

        if task.span.is_inverted() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedSpan,
                format!(
                    "Task '{}' ends at {} before it starts at {}",
                    task.id, task.span.end, task.span.start
                ),
            ));
        } else if let Some(limit) = config.max_span_units {
            if task.span.len() > limit {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SpanTooLong,
                    format!(
                        "Task '{}' spans {} units, limit is {}",
                        task.id,
                        task.span.len(),
                        limit
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("PO-1", "LINE-A", 0, 4),
            Task::new("PO-2", "LINE-A", 3, 6),
            Task::new("PO-3", "LINE-B", 1, 1),
        ]
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_tasks(&sample_tasks(), &LaneConfig::default()).is_ok());
        assert!(validate_tasks(&[], &LaneConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut tasks = sample_tasks();
        tasks.push(Task::new("PO-1", "LINE-B", 8, 9));

        let errors = validate_tasks(&tasks, &LaneConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].to_string().contains("PO-1"));
    }

    #[test]
    fn test_missing_id_and_resource() {
        let tasks = vec![Task::new("", "LINE-A", 0, 1), Task::new("PO-9", "", 0, 1)];

        let errors = validate_tasks(&tasks, &LaneConfig::default()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::MissingId));
        assert!(has_kind(&errors, ValidationErrorKind::MissingResource));
    }

    #[test]
    fn test_inverted_span() {
        let tasks = vec![Task::new("PO-1", "LINE-A", 5, 2)];
        let errors = validate_tasks(&tasks, &LaneConfig::default()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvertedSpan));
    }

    #[test]
    fn test_single_unit_span_is_valid() {
        let tasks = vec![Task::new("PO-1", "LINE-A", 5, 5)];
        let config = LaneConfig::new().with_max_span_units(1);
        assert!(validate_tasks(&tasks, &config).is_ok());
    }

    #[test]
    fn test_span_limit() {
        let tasks = vec![Task::new("PO-1", "LINE-A", 0, 365)]; // 366 units
        let config = LaneConfig::new().with_max_span_units(365);

        let errors = validate_tasks(&tasks, &config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::SpanTooLong));
        assert!(validate_tasks(&tasks, &LaneConfig::default()).is_ok());
    }

    #[test]
    fn test_span_limit_on_widest_span() {
        let tasks = vec![Task::new("PO-1", "LINE-A", i64::MIN, i64::MAX)];
        let config = LaneConfig::new().with_max_span_units(365);

        let errors = validate_tasks(&tasks, &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::SpanTooLong);
    }

    #[test]
    fn test_multiple_errors() {
        let tasks = vec![
            Task::new("PO-1", "", 0, 1),
            Task::new("PO-1", "LINE-A", 9, 3),
        ];
        let errors = validate_tasks(&tasks, &LaneConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
