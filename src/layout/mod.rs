//! Lane layout for overlapping timeline tasks.
//!
//! Stacks tasks that overlap in time on the same resource into separate
//! display lanes, and measures how crowded the result is.
//!
//! # Algorithm
//!
//! `LaneAssigner` is a greedy first-fit interval colouring: tasks are
//! taken in input order and each gets the lowest lane that is free over
//! its whole span. It is not lane-optimal for arbitrary orders, but it is
//! stable, so a planner's ordering decides which orders stay on top.
//!
//! # Stats
//!
//! `LayoutStats` reports lane counts, peak concurrency, busy units, and
//! clamped tasks per resource.
//!
//! # References
//!
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8
//! - Kierstead & Trotter (1981), "An extremal problem in recursive combinatorics"

mod assigner;
mod occupancy;
mod stats;

pub use assigner::LaneAssigner;
pub use occupancy::OccupancyMap;
pub use stats::{LayoutStats, ResourceStats};
