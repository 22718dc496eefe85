//! Guard checks for robot transitions.
//!
//! Each guard is a pure function covering exactly one reason a command may be
//! ignored. Operations chain them with `?` and stop at the first failure, so a
//! rejected command never partially applies.

use super::facing::Facing;
use super::rejection::{Axis, Rejection};
use super::state::Placement;
use super::table::{Position, Table};

/// The coordinate token must be an integer.
pub fn coordinate(axis: Axis, token: &str) -> Result<i64, Rejection> {
    token
        .parse::<i64>()
        .map_err(|_| Rejection::InvalidCoordinate {
            axis,
            value: token.to_string(),
        })
}

/// The facing token must be one of the canonical names.
pub fn facing(token: &str) -> Result<Facing, Rejection> {
    token.parse()
}

/// The position must lie on the table.
pub fn on_table(table: &Table, position: Position) -> Result<Position, Rejection> {
    if table.contains(position) {
        Ok(position)
    } else {
        Err(Rejection::OffTable { position })
    }
}

/// The robot must already be on the table.
pub fn placed(placement: Option<Placement>) -> Result<Placement, Rejection> {
    placement.ok_or(Rejection::NotPlaced)
}

/// One step forward from `placement` must stay on the table.
pub fn safe_step(table: &Table, placement: Placement) -> Result<Position, Rejection> {
    let from = placement.position;
    match from.offset(placement.facing.displacement()) {
        Some(to) if table.contains(to) => Ok(to),
        Some(to) => Err(Rejection::WouldFall { from, to }),
        // Only reachable with coordinates far outside any table.
        None => Err(Rejection::WouldFall { from, to: from }),
    }
}
