use serde::Serialize;

use crate::tables::{combo_for_pair, doubles_for_face, win_for_total};

/// One resolved roll, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub die1: u32,
    pub die2: u32,
    pub combo: String,
    pub win: String,
}

impl RoundResult {
    pub fn new(die1: u32, die2: u32) -> Self {
        let (combo, win) = resolve(die1, die2);
        Self {
            die1,
            die2,
            combo: combo.to_owned(),
            win: win.to_owned(),
        }
    }

    pub fn display_text(&self) -> String {
        format_result(self.die1, self.die2, &self.combo, &self.win)
    }
}

/// Returns `(combo, win)` for a pair of dice; either may be empty.
pub fn resolve(die1: u32, die2: u32) -> (&'static str, &'static str) {
    (resolve_combo(die1, die2), resolve_win(die1, die2))
}

/// Doubles are decided by the doubles table alone, even when the face has
/// no name there.
pub fn resolve_combo(die1: u32, die2: u32) -> &'static str {
    if die1 == die2 {
        return doubles_for_face(die1).unwrap_or("");
    }
    combo_for_pair(die1, die2).unwrap_or("")
}

pub fn resolve_win(die1: u32, die2: u32) -> &'static str {
    win_for_total(die1 + die2).unwrap_or("")
}

/// Renders the roll line, the optional combo/win line and a trailing blank
/// line.
pub fn format_result(die1: u32, die2: u32, combo: &str, win: &str) -> String {
    let mut text = format!("Rolled {die1} & {die2}.\n");
    let named: Vec<&str> = [combo.trim(), win.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !named.is_empty() {
        text.push_str(&named.join(", "));
        text.push('\n');
    }
    text.push('\n');
    text
}
