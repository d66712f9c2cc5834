//! Timeline domain models.
//!
//! Plain data types exchanged with the surrounding planning system:
//! tasks come in from the data-access layer, layouts go out to the
//! rendering layer.
//!
//! # Domain Mappings
//!
//! | u-timeline | Apparel Planning | Machine Shop | Hospital |
//! |------------|------------------|--------------|----------|
//! | Task | Production Order | Job | Surgery |
//! | Resource key | Sewing Line | Machine | Operating Room |
//! | Lane | Stack Level | Gantt Row | Display Row |
//! | Span | Planned Days | Shift Slots | Hour Slots |

mod layout;
mod span;
mod task;

pub use layout::{DensityWarning, LaneAssignment, LaneLayout, Placement};
pub use span::Span;
pub use task::Task;
