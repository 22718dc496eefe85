//! Command parse errors.

use thiserror::Error;

/// Errors that can occur when parsing a command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty line")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{command} takes {expected} argument(s), got {found}")]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },
}
