//! Reasons a robot command was ignored.

use super::table::Position;
use std::fmt;
use thiserror::Error;

/// Which coordinate of a `PLACE` command failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Why a command left the robot untouched.
///
/// Rejections are diagnostics only. The robot operations never return them;
/// they are logged and dropped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("{axis} coordinate '{value}' is not an integer")]
    InvalidCoordinate { axis: Axis, value: String },

    #[error("unknown facing '{0}', expected NORTH, EAST, SOUTH or WEST")]
    UnknownFacing(String),

    #[error("position {position} is not on the table")]
    OffTable { position: Position },

    #[error("moving from {from} to {to} would leave the table")]
    WouldFall { from: Position, to: Position },

    #[error("robot has not been placed")]
    NotPlaced,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = Rejection::InvalidCoordinate {
            axis: Axis::Y,
            value: "two".to_string(),
        };
        assert_eq!(err.to_string(), "y coordinate 'two' is not an integer");

        let err = Rejection::WouldFall {
            from: Position::new(0, 0),
            to: Position::new(0, -1),
        };
        assert_eq!(
            err.to_string(),
            "moving from (0, 0) to (0, -1) would leave the table"
        );
    }
}
