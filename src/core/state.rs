//! The robot state machine.
//!
//! A robot is either unplaced or placed on its table with a facing. Every
//! operation runs its guards first and leaves the state untouched when any of
//! them fails. The only trace of a rejected command is a `debug` event.

use super::facing::Facing;
use super::guard;
use super::rejection::{Axis, Rejection};
use super::report::Report;
use super::table::{Position, Table};
use serde::{Deserialize, Serialize};

/// The five operations a command stream can drive.
///
/// None of them signal failure. Invalid input is ignored and observable only
/// as the absence of change.
pub trait Robot {
    /// Put the robot at `(x, y)` facing `facing`, replacing any earlier placement.
    ///
    /// All three tokens are parsed here. If any of them fails to parse, or the
    /// position is off the table, nothing happens.
    fn place(&mut self, x: &str, y: &str, facing: &str);

    /// Quarter turn counter-clockwise.
    fn left(&mut self);

    /// Quarter turn clockwise.
    fn right(&mut self);

    /// One step forward, unless that step would leave the table.
    fn move_forward(&mut self);

    /// Current position and facing, or `None` before the first successful place.
    fn report(&self) -> Option<Report>;
}

/// Position and facing of a robot that is on the table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub facing: Facing,
}

impl Placement {
    pub fn new(position: Position, facing: Facing) -> Self {
        Self { position, facing }
    }
}

/// Coarse lifecycle of a robot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    Unplaced,
    Placed,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unplaced => "Unplaced",
            Self::Placed => "Placed",
        }
    }
}

/// A single robot on a fixed table.
///
/// Starts unplaced. Once a `place` succeeds the robot stays on the table for
/// the rest of its life; no operation removes it.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Facing, Report, RobotState, Table};
/// use toy_robot::Robot;
///
/// let mut robot = RobotState::new(Table::default());
/// assert_eq!(robot.report(), None);
///
/// robot.place("1", "2", "EAST");
/// robot.move_forward();
/// robot.move_forward();
/// robot.left();
/// robot.move_forward();
///
/// assert_eq!(
///     robot.report(),
///     Some(Report { x: 3, y: 3, facing: Facing::North })
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RobotState {
    table: Table,
    placement: Option<Placement>,
}

impl RobotState {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            placement: None,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn phase(&self) -> Phase {
        match self.placement {
            Some(_) => Phase::Placed,
            None => Phase::Unplaced,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Typed form of [`Robot::place`] for callers that already hold parsed values.
    ///
    /// The bounds guard still applies.
    pub fn place_at(&mut self, position: Position, facing: Facing) {
        match guard::on_table(&self.table, position) {
            Ok(position) => self.apply("PLACE", Placement::new(position, facing)),
            Err(reason) => ignored("PLACE", &reason),
        }
    }

    fn parse_placement(&self, x: &str, y: &str, facing: &str) -> Result<Placement, Rejection> {
        let x = guard::coordinate(Axis::X, x)?;
        let y = guard::coordinate(Axis::Y, y)?;
        let position = guard::on_table(&self.table, Position::new(x, y))?;
        let facing = guard::facing(facing)?;
        Ok(Placement::new(position, facing))
    }

    fn rotated(&self, turn: fn(Facing) -> Facing) -> Result<Placement, Rejection> {
        let current = guard::placed(self.placement)?;
        Ok(Placement::new(current.position, turn(current.facing)))
    }

    fn stepped(&self) -> Result<Placement, Rejection> {
        let current = guard::placed(self.placement)?;
        let position = guard::safe_step(&self.table, current)?;
        Ok(Placement::new(position, current.facing))
    }

    fn apply(&mut self, command: &'static str, next: Placement) {
        tracing::trace!(
            command,
            from = self.phase().name(),
            x = next.position.x,
            y = next.position.y,
            facing = next.facing.name(),
            "robot transition"
        );
        self.placement = Some(next);
    }

    fn settle(&mut self, command: &'static str, outcome: Result<Placement, Rejection>) {
        match outcome {
            Ok(next) => self.apply(command, next),
            Err(reason) => ignored(command, &reason),
        }
    }
}

impl Robot for RobotState {
    fn place(&mut self, x: &str, y: &str, facing: &str) {
        let outcome = self.parse_placement(x, y, facing);
        self.settle("PLACE", outcome);
    }

    fn left(&mut self) {
        let outcome = self.rotated(Facing::counter_clockwise);
        self.settle("LEFT", outcome);
    }

    fn right(&mut self) {
        let outcome = self.rotated(Facing::clockwise);
        self.settle("RIGHT", outcome);
    }

    fn move_forward(&mut self) {
        let outcome = self.stepped();
        self.settle("MOVE", outcome);
    }

    fn report(&self) -> Option<Report> {
        match guard::placed(self.placement) {
            Ok(Placement { position, facing }) => Some(Report {
                x: position.x,
                y: position.y,
                facing,
            }),
            Err(reason) => {
                ignored("REPORT", &reason);
                None
            }
        }
    }
}

fn ignored(command: &'static str, reason: &Rejection) {
    tracing::debug!(command, %reason, "command ignored");
}
