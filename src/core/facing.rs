//! Compass facings and their rotation cycle.

use super::rejection::Rejection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four directions the robot can face.
///
/// The facings form a fixed clockwise cycle `NORTH -> EAST -> SOUTH -> WEST -> NORTH`.
/// Rotation is expressed as explicit lookups rather than index arithmetic.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::Facing;
///
/// let facing: Facing = "EAST".parse().unwrap();
/// assert_eq!(facing.clockwise(), Facing::South);
/// assert_eq!(facing.counter_clockwise(), Facing::North);
/// assert_eq!(facing.displacement(), (1, 0));
/// assert_eq!(facing.to_string(), "EAST");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All facings in clockwise order, starting at north.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// The canonical upper-case name, as accepted by `PLACE` and written by `REPORT`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    /// The facing one quarter turn to the right.
    pub fn clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The facing one quarter turn to the left.
    pub fn counter_clockwise(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Unit step `(dx, dy)` taken by a single move in this facing.
    ///
    /// North is towards increasing `y`.
    pub fn displacement(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facing {
    type Err = Rejection;

    /// Parses the canonical name exactly. `north` or `North` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|facing| facing.name() == s)
            .ok_or_else(|| Rejection::UnknownFacing(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!("NORTH".parse::<Facing>().unwrap(), Facing::North);
        assert_eq!("EAST".parse::<Facing>().unwrap(), Facing::East);
        assert_eq!("SOUTH".parse::<Facing>().unwrap(), Facing::South);
        assert_eq!("WEST".parse::<Facing>().unwrap(), Facing::West);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        for token in ["north", "North", "nORTH", " NORTH", "", "UP"] {
            let err = token.parse::<Facing>().unwrap_err();
            assert_eq!(err, Rejection::UnknownFacing(token.to_string()));
        }
    }

    #[test]
    fn clockwise_cycle_order() {
        assert_eq!(Facing::North.clockwise(), Facing::East);
        assert_eq!(Facing::East.clockwise(), Facing::South);
        assert_eq!(Facing::South.clockwise(), Facing::West);
        assert_eq!(Facing::West.clockwise(), Facing::North);
    }

    #[test]
    fn counter_clockwise_cycle_order() {
        assert_eq!(Facing::North.counter_clockwise(), Facing::West);
        assert_eq!(Facing::West.counter_clockwise(), Facing::South);
        assert_eq!(Facing::South.counter_clockwise(), Facing::East);
        assert_eq!(Facing::East.counter_clockwise(), Facing::North);
    }

    #[test]
    fn rotations_are_inverse() {
        for facing in Facing::ALL {
            assert_eq!(facing.clockwise().counter_clockwise(), facing);
            assert_eq!(facing.counter_clockwise().clockwise(), facing);
        }
    }

    #[test]
    fn displacements_are_unit_vectors() {
        assert_eq!(Facing::North.displacement(), (0, 1));
        assert_eq!(Facing::East.displacement(), (1, 0));
        assert_eq!(Facing::South.displacement(), (0, -1));
        assert_eq!(Facing::West.displacement(), (-1, 0));
    }

    #[test]
    fn display_matches_name() {
        for facing in Facing::ALL {
            assert_eq!(facing.to_string(), facing.name());
        }
    }

    #[test]
    fn facing_serializes_as_canonical_name() {
        let json = serde_json::to_string(&Facing::West).unwrap();
        assert_eq!(json, "\"WEST\"");
        let deserialized: Facing = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Facing::West);
    }
}
