mod terminal;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dice_core::{DiceConfig, DiceRng, InputMode, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalConsole;

#[derive(Parser)]
#[command(version, about = "Roll two dice and see what you get")]
struct Cli {
    /// Optional TOML file with input and telemetry settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// How yes/no answers are read; overrides the config file.
    #[arg(long, value_enum)]
    input: Option<InputArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputArg {
    Auto,
    Raw,
    Line,
}

impl From<InputArg> for InputMode {
    fn from(arg: InputArg) -> Self {
        match arg {
            InputArg::Auto => InputMode::Auto,
            InputArg::Raw => InputMode::Raw,
            InputArg::Line => InputMode::Line,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => DiceConfig::from_path(path)?,
        None => DiceConfig::default(),
    };
    init_tracing(config.telemetry.trace_filter());

    let mode = cli.input.map(InputMode::from).unwrap_or(config.input.mode());
    let mut console = TerminalConsole::new(mode);
    match Session::new(&mut console, DiceRng::from_entropy()).run() {
        Ok(summary) => {
            info!(target: "dice_cli", rounds = summary.rounds, "bye");
            Ok(())
        }
        Err(err) if err.is_quiet_exit() => {
            info!(target: "dice_cli", error = %err, "session ended early");
            Ok(())
        }
        Err(err) => Err(err).context("dice session failed"),
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
