//! Toy Robot: a robot on a bounded table that refuses to fall off.
//!
//! The robot is a small synchronous state machine. It is either unplaced or
//! sitting on the table with a facing, and every command is checked against
//! the table bounds before it takes effect. Commands that would break the
//! rules are ignored rather than reported as errors.
//!
//! # Core Concepts
//!
//! - **Table**: Fixed grid dimensions supplied at construction
//! - **RobotState**: The state machine behind the `Robot` operations
//! - **Command**: The closed set of text commands (`PLACE`, `LEFT`, `RIGHT`, `MOVE`, `REPORT`)
//! - **Session**: Dispatches parsed commands to a robot and writes reports
//!
//! # Example
//!
//! ```rust
//! use toy_robot::{Command, Facing, Report, RobotState, Session, Table};
//!
//! let mut session = Session::new(RobotState::new(Table::default()));
//! session.execute(&Command::place("0", "0", "SOUTH"));
//! session.execute(&Command::Move);
//!
//! assert_eq!(
//!     session.execute(&Command::Report),
//!     Some(Report { x: 0, y: 0, facing: Facing::South })
//! );
//! ```

pub mod command;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::command::{Command, CommandKind, ParseError};
pub use crate::core::{Facing, Position, Report, Robot, RobotState, Table, TableError};
pub use crate::session::{OutputFormat, Session, SessionError, Summary};
