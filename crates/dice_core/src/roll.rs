use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::input::Sides;

/// Uniform source for die faces.
///
/// The binary seeds from OS entropy every run; tests pin a seed so rolls
/// can be replayed.
pub struct DiceRng {
    seed: Option<u64>,
    rng: StdRng,
}

impl DiceRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            seed: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn roll_die(&mut self, sides: Sides) -> u32 {
        self.rng.gen_range(1..=sides.get())
    }
}

/// Rolls two independent dice with the same number of sides.
pub fn roll_pair(rng: &mut DiceRng, sides: Sides) -> (u32, u32) {
    let die1 = rng.roll_die(sides);
    let die2 = rng.roll_die(sides);
    debug!(target: "dice_core.roll", sides = sides.get(), die1, die2, "rolled pair");
    (die1, die2)
}
