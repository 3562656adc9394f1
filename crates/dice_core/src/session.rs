//! Round loop: welcome, any number of rounds, goodbye.

use tracing::{debug, info};

use crate::console::{Console, ConsoleError, Key};
use crate::input::read_sides;
use crate::outcome::RoundResult;
use crate::roll::{roll_pair, DiceRng};

pub const WELCOME: &str = "Welcome to the dice roller!";
pub const SIDES_PROMPT: &str = "How many sides should the dice have?";
pub const ONE_SIDED_QUIP: &str =
    "\"Oh look at that, a 2. Why? Because I'm the GM and I say so.\"";
pub const REPLAY_PROMPT: &str = "Would you like to roll again?";
pub const FAREWELL: &str = "Thanks for playing! Press any key to exit...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A one-sided die was requested; nothing was rolled.
    OneSided,
    Rolled(RoundResult),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub rolls: u32,
}

pub struct Session<'a, C: Console + ?Sized> {
    console: &'a mut C,
    rng: DiceRng,
    summary: SessionSummary,
}

impl<'a, C: Console + ?Sized> Session<'a, C> {
    pub fn new(console: &'a mut C, rng: DiceRng) -> Self {
        Self {
            console,
            rng,
            summary: SessionSummary::default(),
        }
    }

    /// Plays rounds until the player declines another, then waits for a
    /// final keypress.
    pub fn run(mut self) -> Result<SessionSummary, ConsoleError> {
        info!(target: "dice_core.session", seed = ?self.rng.seed(), "session started");
        self.console.write_line(WELCOME)?;

        loop {
            self.play_round()?;
            if !prompt_yes_no(&mut *self.console, true, REPLAY_PROMPT)? {
                break;
            }
            self.console.clear_screen()?;
        }

        self.console.write_line(FAREWELL)?;
        match self.console.read_key() {
            Ok(_) => {}
            Err(err) if err.is_quiet_exit() => {}
            Err(err) => return Err(err),
        }

        info!(
            target: "dice_core.session",
            rounds = self.summary.rounds,
            rolls = self.summary.rolls,
            "session finished"
        );
        Ok(self.summary)
    }

    pub fn play_round(&mut self) -> Result<RoundOutcome, ConsoleError> {
        self.console.write_line(SIDES_PROMPT)?;
        let sides = read_sides(&mut *self.console)?;
        self.summary.rounds += 1;

        if sides.is_trivial() {
            debug!(target: "dice_core.session", round = self.summary.rounds, "one-sided die requested");
            self.console.write_line(ONE_SIDED_QUIP)?;
            self.console.write_line("")?;
            return Ok(RoundOutcome::OneSided);
        }

        self.console.write_line(&format!(
            "Rolling 2 dice with {} sides each...",
            sides.get()
        ))?;
        let (die1, die2) = roll_pair(&mut self.rng, sides);
        let result = RoundResult::new(die1, die2);
        self.summary.rolls += 1;
        info!(
            target: "dice_core.session",
            round = self.summary.rounds,
            sides = sides.get(),
            die1,
            die2,
            combo = %result.combo,
            win = %result.win,
            "round resolved"
        );
        self.console.write_text(&result.display_text())?;
        Ok(RoundOutcome::Rolled(result))
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }
}

/// Asks a yes/no question answered by a single keypress. Keys other than
/// y, n and (when allowed) Escape are ignored.
pub fn prompt_yes_no<C: Console + ?Sized>(
    console: &mut C,
    allow_escape: bool,
    message: &str,
) -> Result<bool, ConsoleError> {
    console.write_line(&format!("{message} [Y/N]"))?;
    loop {
        match console.read_key()? {
            Key::Char('y' | 'Y') => return Ok(true),
            Key::Char('n' | 'N') => return Ok(false),
            Key::Escape if allow_escape => return Ok(false),
            key => debug!(target: "dice_core.session", ?key, "ignored keypress"),
        }
    }
}
