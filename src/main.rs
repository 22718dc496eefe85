use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use toy_robot::{OutputFormat, RobotState, Session, Table};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "toy-robot",
    about = "Drive a toy robot around a table from a file of commands",
    version
)]
struct Cli {
    /// File with one command per line (PLACE X,Y,F | LEFT | RIGHT | MOVE | REPORT)
    input: PathBuf,

    /// Table width
    #[arg(long, env = "TOY_ROBOT_WIDTH", default_value_t = Table::DEFAULT_SIZE,
          value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Table height
    #[arg(long, env = "TOY_ROBOT_HEIGHT", default_value_t = Table::DEFAULT_SIZE,
          value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Write reports as JSON objects
    #[arg(long, short = 'j')]
    json: bool,

    /// Log ignored commands to stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// `-v` flags set the level outright; without them `RUST_LOG` applies, defaulting to `warn`.
fn log_filter(verbose: u8) -> EnvFilter {
    if verbose == 0 {
        return EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    }
    let level = match verbose {
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    EnvFilter::from_default_env().add_directive(level.into())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let table = Table::new(cli.width, cli.height)?;
    let file = File::open(&cli.input)
        .with_context(|| format!("cannot open command file {}", cli.input.display()))?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };

    tracing::debug!(%table, input = %cli.input.display(), "starting session");

    let mut session = Session::new(RobotState::new(table));
    let stdout = io::stdout();
    let mut output = stdout.lock();
    session.run(BufReader::new(file), &mut output, format)?;
    Ok(())
}
