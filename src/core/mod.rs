//! Core robot types and logic.
//!
//! This module contains the pure state machine of the robot:
//! - Table geometry and positions
//! - Facings and their rotation cycle
//! - Guards, one per reason a command is ignored
//! - The `RobotState` machine and its `Robot` interface
//!
//! Nothing here performs I/O. Ignored commands surface only as `tracing` events.

mod facing;
pub mod guard;
mod rejection;
mod report;
mod state;
mod table;

pub use facing::Facing;
pub use rejection::{Axis, Rejection};
pub use report::Report;
pub use state::{Phase, Placement, Robot, RobotState};
pub use table::{Position, Table, TableError};
