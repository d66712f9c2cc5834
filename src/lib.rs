//! Timeline layout for the U-Engine scheduling ecosystem.
//!
//! Takes scheduled tasks (production orders on sewing lines, jobs on
//! machines) and stacks the ones that overlap in time into separate
//! display lanes per resource, ready for a Gantt-style view.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `Span`, `Placement`,
//!   `LaneAssignment`, `LaneLayout`, `DensityWarning`
//! - **`layout`**: `LaneAssigner` and `LayoutStats`
//! - **`validation`**: Input integrity checks (duplicate IDs, inverted spans)
//! - **`timeline`**: Millisecond-to-unit discretization (`TimeScale`)
//! - **`config`**: `LaneConfig` (lane ceiling, span limit)
//!
//! # Example
//!
//! ```
//! use u_timeline::layout::LaneAssigner;
//! use u_timeline::models::{Placement, Task};
//! use u_timeline::timeline::{TimeScale, DAY_MS};
//!
//! let scale = TimeScale::daily(0);
//! let tasks = vec![
//!     Task::from_window("PO-1", "LINE-A", &scale, 0, 3 * DAY_MS),
//!     Task::from_window("PO-2", "LINE-A", &scale, 2 * DAY_MS, 5 * DAY_MS),
//! ];
//!
//! let layout = LaneAssigner::new().assign(&tasks);
//! assert_eq!(layout.placement_of("PO-2"), Some(Placement::Placed(1)));
//! assert!(layout.is_clamp_free());
//! ```
//!
//! # Observability
//!
//! Clamped tasks are reported as `tracing` warnings in addition to the
//! `DensityWarning`s on the layout. The crate installs no subscriber.

pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod timeline;
pub mod validation;

pub use config::LaneConfig;
pub use error::ConfigError;
