//! Text command protocol.
//!
//! One command per line. The command word is case-insensitive; `PLACE` takes
//! a comma-separated `X,Y,F` argument and every other command takes none.
//!
//! # Example
//!
//! ```rust
//! use toy_robot::command::{Command, ParseError};
//!
//! let command: Command = "place 1, 2, EAST".parse().unwrap();
//! assert_eq!(command, Command::place("1", "2", "EAST"));
//!
//! assert_eq!("MOVE".parse::<Command>(), Ok(Command::Move));
//! assert_eq!(
//!     "JUMP".parse::<Command>(),
//!     Err(ParseError::UnknownCommand("JUMP".to_string()))
//! );
//! ```

mod error;

pub use error::ParseError;

use std::str::FromStr;

/// The closed set of command kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CommandKind {
    Place,
    Left,
    Right,
    Move,
    Report,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Place,
        CommandKind::Left,
        CommandKind::Right,
        CommandKind::Move,
        CommandKind::Report,
    ];

    /// The canonical command word.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Place => "PLACE",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Move => "MOVE",
            Self::Report => "REPORT",
        }
    }

    /// Number of comma-separated arguments the command expects.
    pub fn arity(&self) -> usize {
        match self {
            Self::Place => 3,
            Self::Left | Self::Right | Self::Move | Self::Report => 0,
        }
    }

    /// Look up a command word, ignoring ASCII case.
    pub fn from_token(token: &str) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseError::UnknownCommand(token.to_string()))
    }
}

/// A parsed command ready for dispatch.
///
/// `Place` keeps its arguments as raw tokens. Coordinate and facing parsing
/// belongs to the robot, which ignores the whole command if any token is bad.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Place {
        x: String,
        y: String,
        facing: String,
    },
    Left,
    Right,
    Move,
    Report,
}

impl Command {
    pub fn place(x: impl Into<String>, y: impl Into<String>, facing: impl Into<String>) -> Self {
        Self::Place {
            x: x.into(),
            y: y.into(),
            facing: facing.into(),
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Place { .. } => CommandKind::Place,
            Self::Left => CommandKind::Left,
            Self::Right => CommandKind::Right,
            Self::Move => CommandKind::Move,
            Self::Report => CommandKind::Report,
        }
    }

    /// Parse a single line.
    ///
    /// Leading and trailing whitespace is ignored. Everything after the command
    /// word is the argument list, split on `,` with each piece trimmed.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (token, rest) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim()),
            None => (line, ""),
        };
        let kind = CommandKind::from_token(token)?;

        let args: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(',').map(str::trim).collect()
        };
        match (kind, args.as_slice()) {
            (CommandKind::Place, [x, y, facing]) => Ok(Self::place(*x, *y, *facing)),
            (CommandKind::Left, []) => Ok(Self::Left),
            (CommandKind::Right, []) => Ok(Self::Right),
            (CommandKind::Move, []) => Ok(Self::Move),
            (CommandKind::Report, []) => Ok(Self::Report),
            (kind, args) => Err(ParseError::ArgumentCount {
                command: kind.name(),
                expected: kind.arity(),
                found: args.len(),
            }),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command_word() {
        assert_eq!(Command::parse("LEFT"), Ok(Command::Left));
        assert_eq!(Command::parse("RIGHT"), Ok(Command::Right));
        assert_eq!(Command::parse("MOVE"), Ok(Command::Move));
        assert_eq!(Command::parse("REPORT"), Ok(Command::Report));
        assert_eq!(
            Command::parse("PLACE 0,0,NORTH"),
            Ok(Command::place("0", "0", "NORTH"))
        );
    }

    #[test]
    fn command_words_are_case_insensitive() {
        assert_eq!(Command::parse("move"), Ok(Command::Move));
        assert_eq!(Command::parse("Report"), Ok(Command::Report));
        assert_eq!(
            Command::parse("place 1,2,EAST"),
            Ok(Command::place("1", "2", "EAST"))
        );
    }

    #[test]
    fn place_arguments_keep_their_case() {
        assert_eq!(
            Command::parse("PLACE 1,2,east"),
            Ok(Command::place("1", "2", "east"))
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(Command::parse("  MOVE \r"), Ok(Command::Move));
        assert_eq!(
            Command::parse("\tPLACE  3 , 4 ,SOUTH  "),
            Ok(Command::place("3", "4", "SOUTH"))
        );
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(Command::parse(""), Err(ParseError::Empty));
        assert_eq!(Command::parse("   \t"), Err(ParseError::Empty));
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert_eq!(
            Command::parse("JUMP 1,2"),
            Err(ParseError::UnknownCommand("JUMP".to_string()))
        );
        assert_eq!(
            Command::parse("PLACE1,2,NORTH"),
            Err(ParseError::UnknownCommand("PLACE1,2,NORTH".to_string()))
        );
    }

    #[test]
    fn place_requires_three_arguments() {
        assert_eq!(
            Command::parse("PLACE"),
            Err(ParseError::ArgumentCount {
                command: "PLACE",
                expected: 3,
                found: 0
            })
        );
        assert_eq!(
            Command::parse("PLACE 1,2"),
            Err(ParseError::ArgumentCount {
                command: "PLACE",
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Command::parse("PLACE 1,2,NORTH,EXTRA"),
            Err(ParseError::ArgumentCount {
                command: "PLACE",
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn bare_commands_reject_arguments() {
        assert_eq!(
            Command::parse("MOVE 2"),
            Err(ParseError::ArgumentCount {
                command: "MOVE",
                expected: 0,
                found: 1
            })
        );
    }

    #[test]
    fn argument_count_error_reports_expected_arity_for_every_kind() {
        for kind in CommandKind::ALL {
            let wrong = if kind.arity() == 0 { 1 } else { kind.arity() - 1 };
            let args = vec!["0"; wrong].join(",");
            assert_eq!(
                Command::parse(&format!("{} {}", kind.name(), args)),
                Err(ParseError::ArgumentCount {
                    command: kind.name(),
                    expected: kind.arity(),
                    found: wrong,
                })
            );
        }
    }

    #[test]
    fn empty_place_arguments_are_kept_for_the_robot_to_reject() {
        assert_eq!(
            Command::parse("PLACE 1,,NORTH"),
            Ok(Command::place("1", "", "NORTH"))
        );
    }

    #[test]
    fn kind_round_trips_through_name() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_token(kind.name()), Ok(kind));
        }
        assert_eq!(Command::place("0", "0", "NORTH").kind(), CommandKind::Place);
        assert_eq!(Command::Report.kind(), CommandKind::Report);
    }

    #[test]
    fn error_messages_are_readable() {
        let err = Command::parse("LEFT now").unwrap_err();
        assert_eq!(err.to_string(), "LEFT takes 0 argument(s), got 1");
    }
}
