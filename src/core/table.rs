//! Table geometry: the bounded grid the robot lives on.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when configuring a table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table must be at least 1x1, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}

/// A grid coordinate.
///
/// Coordinates are signed so that a step off the south or west edge can be
/// expressed before it is rejected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The position one step away along `(dx, dy)`, or `None` on integer overflow.
    pub fn offset(self, (dx, dy): (i64, i64)) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Immutable table dimensions.
///
/// The valid region is `[0, width - 1] x [0, height - 1]`, with `(0, 0)` at
/// the south-west corner.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Position, Table};
///
/// let table = Table::new(5, 5).unwrap();
/// assert!(table.contains(Position::new(4, 0)));
/// assert!(!table.contains(Position::new(5, 0)));
/// assert!(Table::new(0, 5).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "TableDimensions")]
pub struct Table {
    width: u32,
    height: u32,
}

/// Unchecked wire form of [`Table`]; deserialization goes through [`Table::new`].
#[derive(Deserialize)]
struct TableDimensions {
    width: u32,
    height: u32,
}

impl TryFrom<TableDimensions> for Table {
    type Error = TableError;

    fn try_from(dims: TableDimensions) -> Result<Self, Self::Error> {
        Table::new(dims.width, dims.height)
    }
}

impl Table {
    /// Side length of the table used when no size is configured.
    pub const DEFAULT_SIZE: u32 = 5;

    pub fn new(width: u32, height: u32) -> Result<Self, TableError> {
        if width == 0 || height == 0 {
            return Err(TableError::ZeroDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `position` lies on the table, edges inclusive.
    pub fn contains(&self, position: Position) -> bool {
        (0..i64::from(self.width)).contains(&position.x)
            && (0..i64::from(self.height)).contains(&position.y)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
