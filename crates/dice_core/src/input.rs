use std::num::IntErrorKind;

use thiserror::Error;
use tracing::debug;

use crate::console::{Console, ConsoleError};
use crate::tables::MAX_SIDES;

const RETRY_SUFFIX: &str = " Please enter a different value.";

/// A validated die size in `1..=MAX_SIDES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sides(u32);

impl Sides {
    pub fn get(self) -> u32 {
        self.0
    }

    /// A one-sided die never needs rolling.
    pub fn is_trivial(self) -> bool {
        self.0 == 1
    }
}

/// Why a die-size answer was refused. `Display` is the message shown to
/// the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SidesError {
    #[error("{input} isn't a number!")]
    NotANumber { input: String },
    #[error("{input} is too many sides for a die!")]
    Overflow { input: String },
    #[error("{value} is too many sides for a die!")]
    TooManySides { value: i32 },
    #[error("Non-euclidean dice are not allowed!")]
    NonPositive { value: i32 },
}

pub fn parse_sides(input: &str) -> Result<Sides, SidesError> {
    let value = input
        .trim()
        .parse::<i32>()
        .map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SidesError::Overflow {
                input: input.to_owned(),
            },
            _ => SidesError::NotANumber {
                input: input.to_owned(),
            },
        })?;

    if value <= 0 {
        return Err(SidesError::NonPositive { value });
    }
    match u32::try_from(value) {
        Ok(sides) if sides <= MAX_SIDES => Ok(Sides(sides)),
        _ => Err(SidesError::TooManySides { value }),
    }
}

/// Keeps asking until the player names a usable die.
pub fn read_sides<C: Console + ?Sized>(console: &mut C) -> Result<Sides, ConsoleError> {
    loop {
        let line = console.read_line()?;
        match parse_sides(&line) {
            Ok(sides) => return Ok(sides),
            Err(err) => {
                debug!(target: "dice_core.input", input = %line, error = ?err, "rejected die size");
                console.write_line(&format!("{err}{RETRY_SUFFIX}"))?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn accepts_every_supported_size() {
        for value in 1..=MAX_SIDES {
            assert_eq!(value, parse_sides(&value.to_string()).unwrap().get());
        }
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_sign() {
        assert_eq!(6, parse_sides("  6 \t").unwrap().get());
        assert_eq!(4, parse_sides("+4").unwrap().get());
    }

    #[test]
    fn rejects_words() {
        let err = parse_sides("six").unwrap_err();
        assert_eq!("six isn't a number!", err.to_string());
        assert!(matches!(parse_sides(""), Err(SidesError::NotANumber { .. })));
        assert!(matches!(parse_sides("4.5"), Err(SidesError::NotANumber { .. })));
    }

    #[test]
    fn rejects_big_dice() {
        let err = parse_sides(" 11").unwrap_err();
        assert_eq!(SidesError::TooManySides { value: 11 }, err);
        assert_eq!("11 is too many sides for a die!", err.to_string());
    }

    #[test]
    fn overflow_reads_like_too_many_sides() {
        let err = parse_sides("99999999999").unwrap_err();
        assert!(matches!(err, SidesError::Overflow { .. }));
        assert_eq!("99999999999 is too many sides for a die!", err.to_string());
        assert!(matches!(
            parse_sides("-99999999999"),
            Err(SidesError::Overflow { .. })
        ));
    }

    #[test]
    fn rejects_zero_and_negatives() {
        for input in ["0", "-1", "-10"] {
            let err = parse_sides(input).unwrap_err();
            assert_eq!("Non-euclidean dice are not allowed!", err.to_string());
        }
    }

    #[test]
    fn one_sided_die_is_trivial() {
        assert!(parse_sides("1").unwrap().is_trivial());
        assert!(!parse_sides("2").unwrap().is_trivial());
    }

    #[test]
    fn read_sides_reprompts_until_valid() {
        let mut console = ScriptedConsole::new().with_lines(["d20", "20", "0", "8"]);
        let sides = read_sides(&mut console).unwrap();
        assert_eq!(8, sides.get());
        assert_eq!(0, console.pending_lines());
        assert_eq!(
            "d20 isn't a number! Please enter a different value.\n\
             20 is too many sides for a die! Please enter a different value.\n\
             Non-euclidean dice are not allowed! Please enter a different value.\n",
            console.output()
        );
    }

    #[test]
    fn read_sides_gives_up_when_input_closes() {
        let mut console = ScriptedConsole::new().with_lines(["abc"]);
        assert!(matches!(
            read_sides(&mut console),
            Err(ConsoleError::InputClosed)
        ));
    }
}
