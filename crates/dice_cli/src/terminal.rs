use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use dice_core::{Console, ConsoleError, InputMode, Key};
use tracing::debug;

/// Console on the process's stdin/stdout.
///
/// In raw mode each keypress is read with echo off; in line mode a whole
/// line is read and its first character stands in for the key, so answers
/// need Enter.
pub struct TerminalConsole {
    raw_keys: bool,
}

impl TerminalConsole {
    pub fn new(mode: InputMode) -> Self {
        let raw_keys = match mode {
            InputMode::Raw => true,
            InputMode::Line => false,
            InputMode::Auto => io::stdin().is_terminal(),
        };
        debug!(target: "dice_cli.terminal", raw_keys, "console ready");
        Self { raw_keys }
    }

    fn read_raw_key(&mut self) -> Result<Key, ConsoleError> {
        io::stdout().flush()?;
        terminal::enable_raw_mode()?;
        let key = next_key_press();
        terminal::disable_raw_mode()?;
        key
    }
}

fn next_key_press() -> Result<Key, ConsoleError> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        return map_key_event(key);
    }
}

/// Ctrl chords are control characters, not letters; only Ctrl+C means
/// anything.
fn map_key_event(key: KeyEvent) -> Result<Key, ConsoleError> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if control => Err(ConsoleError::Interrupted),
        KeyCode::Char(_) if control => Ok(Key::Other),
        KeyCode::Char(ch) => Ok(Key::from_char(ch)),
        KeyCode::Esc => Ok(Key::Escape),
        _ => Ok(Key::Other),
    }
}

impl Console for TerminalConsole {
    fn write_text(&mut self, text: &str) -> Result<(), ConsoleError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn read_key(&mut self) -> Result<Key, ConsoleError> {
        if self.raw_keys {
            self.read_raw_key()
        } else {
            self.read_line().map(|line| Key::from_line(&line))
        }
    }

    fn clear_screen(&mut self) -> Result<(), ConsoleError> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
