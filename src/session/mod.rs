//! Command dispatch over a robot.
//!
//! A [`Session`] routes parsed commands to a [`Robot`] and writes any reports.
//! It holds no state beyond the robot it drives.
//!
//! # Example
//!
//! ```rust
//! use toy_robot::core::{RobotState, Table};
//! use toy_robot::session::{OutputFormat, Session};
//!
//! let input = "PLACE 0,0,NORTH\nMOVE\nREPORT\n";
//! let mut output = Vec::new();
//!
//! let mut session = Session::new(RobotState::new(Table::default()));
//! let summary = session
//!     .run(input.as_bytes(), &mut output, OutputFormat::Plain)
//!     .unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "0,1,NORTH\n");
//! assert_eq!(summary.reports, 1);
//! ```

mod error;

pub use error::SessionError;

use crate::command::{Command, ParseError};
use crate::core::{Report, Robot};
use std::io::{BufRead, Write};

/// How reports are written.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    /// `X,Y,F`
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Counters for a completed run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Summary {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Commands handed to the robot, whether or not it acted on them.
    pub executed: usize,
    /// Non-blank lines that did not parse.
    pub malformed: usize,
    /// Reports written.
    pub reports: usize,
}

/// Drives one robot from a stream of commands.
pub struct Session<R: Robot> {
    robot: R,
}

impl<R: Robot> Session<R> {
    pub fn new(robot: R) -> Self {
        Self { robot }
    }

    pub fn robot(&self) -> &R {
        &self.robot
    }

    pub fn into_robot(self) -> R {
        self.robot
    }

    /// Apply one command. Only `Report` can produce a value.
    pub fn execute(&mut self, command: &Command) -> Option<Report> {
        match command {
            Command::Place { x, y, facing } => {
                self.robot.place(x, y, facing);
                None
            }
            Command::Left => {
                self.robot.left();
                None
            }
            Command::Right => {
                self.robot.right();
                None
            }
            Command::Move => {
                self.robot.move_forward();
                None
            }
            Command::Report => self.robot.report(),
        }
    }

    /// Parse and apply a single line.
    pub fn run_line(&mut self, line: &str) -> Result<Option<Report>, ParseError> {
        let command = Command::parse(line)?;
        Ok(self.execute(&command))
    }

    /// Run every line of `input`, writing reports to `output`.
    ///
    /// Malformed lines, including ones that are not valid UTF-8, are logged
    /// and skipped. Only I/O and encoding failures stop the run.
    pub fn run<I, W>(
        &mut self,
        mut input: I,
        output: &mut W,
        format: OutputFormat,
    ) -> Result<Summary, SessionError>
    where
        I: BufRead,
        W: Write,
    {
        let mut summary = Summary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = input.read_until(b'\n', &mut buf).map_err(SessionError::Read)?;
            if read == 0 {
                break;
            }
            summary.lines += 1;
            let line_number = summary.lines;

            // Invalid UTF-8 decodes to replacement characters, which the parser rejects.
            let line = String::from_utf8_lossy(&buf);
            match self.run_line(&line) {
                Ok(report) => {
                    summary.executed += 1;
                    if let Some(report) = report {
                        write_report(output, format, &report)?;
                        summary.reports += 1;
                    }
                }
                Err(ParseError::Empty) => {}
                Err(err) => {
                    summary.malformed += 1;
                    tracing::warn!(line = line_number, error = %err, "skipping malformed command");
                }
            }
        }

        output.flush().map_err(SessionError::Write)?;
        tracing::info!(
            lines = summary.lines,
            executed = summary.executed,
            malformed = summary.malformed,
            reports = summary.reports,
            "session complete"
        );
        Ok(summary)
    }
}

fn write_report<W: Write>(
    output: &mut W,
    format: OutputFormat,
    report: &Report,
) -> Result<(), SessionError> {
    match format {
        OutputFormat::Plain => writeln!(output, "{report}").map_err(SessionError::Write),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, report)?;
            writeln!(output).map_err(SessionError::Write)
        }
    }
}
