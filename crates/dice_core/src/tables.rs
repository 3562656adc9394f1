//! Static outcome tables. Nothing here is ever mutated.

/// Largest die the roller accepts.
pub const MAX_SIDES: u32 = 10;

/// Win names keyed by the totals that earn them, in lookup order.
pub const WIN_TABLE: &[(&str, &[u32])] = &[
    ("Win!", &[7, 11, 18]),
    ("Craps", &[2, 3, 12, 16]),
    ("Natural 20!", &[20]),
];

/// Named pairs of distinct faces. Matching ignores order.
pub const COMBO_TABLE: &[((u32, u32), &str)] = &[
    ((1, 2), "Ace Deuce"),
    ((3, 5), "Lesser Primes"),
    ((7, 9), "Greater Primes"),
];

/// Names for rolling the same face on both dice, indexed by `face - 1`.
/// Double threes and double fours have no name.
pub const DOUBLES_TABLE: [Option<&str>; MAX_SIDES as usize] = [
    Some("Snake Eyes"),
    Some("Deuces"),
    None,
    None,
    Some("Double Bluff"),
    Some("Boxcars"),
    Some("Lucky Sevens"),
    Some("Doubles"),
    Some("The Tower"),
    Some("Double Bluff"),
];

pub fn win_for_total(total: u32) -> Option<&'static str> {
    WIN_TABLE
        .iter()
        .find(|(_, totals)| totals.contains(&total))
        .map(|(name, _)| *name)
}

pub fn combo_for_pair(die1: u32, die2: u32) -> Option<&'static str> {
    COMBO_TABLE
        .iter()
        .find(|(pair, _)| *pair == (die1, die2) || *pair == (die2, die1))
        .map(|(_, name)| *name)
}

pub fn doubles_for_face(face: u32) -> Option<&'static str> {
    let index = usize::try_from(face.checked_sub(1)?).ok()?;
    DOUBLES_TABLE.get(index).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_totals_are_disjoint() {
        let mut seen = Vec::new();
        for (_, totals) in WIN_TABLE {
            for total in *totals {
                assert!(!seen.contains(total), "total {total} listed twice");
                seen.push(*total);
            }
        }
    }

    #[test]
    fn win_lookup_matches_declared_sets() {
        assert_eq!(Some("Win!"), win_for_total(7));
        assert_eq!(Some("Win!"), win_for_total(18));
        assert_eq!(Some("Craps"), win_for_total(2));
        assert_eq!(Some("Craps"), win_for_total(16));
        assert_eq!(Some("Natural 20!"), win_for_total(20));
        assert_eq!(None, win_for_total(10));
        assert_eq!(None, win_for_total(0));
    }

    #[test]
    fn combo_lookup_ignores_order() {
        assert_eq!(Some("Lesser Primes"), combo_for_pair(5, 3));
        assert_eq!(Some("Greater Primes"), combo_for_pair(7, 9));
        assert_eq!(None, combo_for_pair(2, 3));
    }

    #[test]
    fn doubles_outside_table_have_no_name() {
        assert_eq!(None, doubles_for_face(0));
        assert_eq!(None, doubles_for_face(11));
        assert_eq!(Some("The Tower"), doubles_for_face(9));
    }
}
