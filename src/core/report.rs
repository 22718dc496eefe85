//! Position reports.

use super::facing::Facing;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The robot's position and facing as emitted by `REPORT`.
///
/// Displays as `X,Y,F` with no spaces.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Facing, Report};
///
/// let report = Report { x: 0, y: 1, facing: Facing::North };
/// assert_eq!(report.to_string(), "0,1,NORTH");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Report {
    pub x: i64,
    pub y: i64,
    pub facing: Facing,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.facing)
    }
}
