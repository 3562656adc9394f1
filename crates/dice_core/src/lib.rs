//! Core rules and session flow for the dice roller.

pub mod config;
pub mod console;
pub mod input;
pub mod outcome;
pub mod roll;
pub mod session;
pub mod tables;

pub use config::{ConfigError, DiceConfig, InputMode, InputSettings, TelemetrySettings};
pub use console::{Console, ConsoleError, Key, ScriptedConsole};
pub use input::{parse_sides, read_sides, Sides, SidesError};
pub use outcome::{format_result, resolve, resolve_combo, resolve_win, RoundResult};
pub use roll::{roll_pair, DiceRng};
pub use session::{prompt_yes_no, RoundOutcome, Session, SessionSummary};
pub use tables::MAX_SIDES;
