//! Terminal capabilities the session needs, and an in-memory stand-in.

use std::collections::VecDeque;

use thiserror::Error;

const ESCAPE: char = '\u{1b}';

/// A single keypress as the yes/no prompt sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

impl Key {
    /// Maps a raw character, treating ESC (0x1B) as [`Key::Escape`].
    pub fn from_char(ch: char) -> Self {
        if ch == ESCAPE {
            Key::Escape
        } else {
            Key::Char(ch)
        }
    }

    /// Line-input fallback: the first character of the line is the key.
    pub fn from_line(line: &str) -> Self {
        line.chars().next().map(Key::from_char).unwrap_or(Key::Other)
    }
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
    #[error("input stream closed")]
    InputClosed,
    #[error("interrupted by user")]
    Interrupted,
}

impl ConsoleError {
    /// Closed input and Ctrl+C end a session without being failures.
    pub fn is_quiet_exit(&self) -> bool {
        matches!(self, ConsoleError::InputClosed | ConsoleError::Interrupted)
    }
}

pub trait Console {
    fn write_text(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Reads one line without its terminator. End of input is
    /// [`ConsoleError::InputClosed`].
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Reads one keypress without echoing it.
    fn read_key(&mut self) -> Result<Key, ConsoleError>;

    fn clear_screen(&mut self) -> Result<(), ConsoleError>;

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.write_text(text)?;
        self.write_text("\n")
    }
}

/// Console fed from queued lines and keys, capturing everything written.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    keys: VecDeque<Key>,
    output: String,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn pending_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Console for ScriptedConsole {
    fn write_text(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.lines.pop_front().ok_or(ConsoleError::InputClosed)
    }

    fn read_key(&mut self) -> Result<Key, ConsoleError> {
        self.keys.pop_front().ok_or(ConsoleError::InputClosed)
    }

    fn clear_screen(&mut self) -> Result<(), ConsoleError> {
        self.clears += 1;
        Ok(())
    }
}
