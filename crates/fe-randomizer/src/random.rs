//! Randomness for the field draws
//!
//! The generators never touch a global RNG: every draw goes through a
//! [`RandomSource`] handed in by the caller, so a fixed seed (or a scripted
//! source in tests) reproduces a draw exactly.

use fe_core::{Direction, Toss};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::cards::CardId;

/// Source of independent, uniformly distributed outcomes
pub trait RandomSource {
    /// Fair coin toss
    fn toss_coin(&mut self) -> Toss;

    /// Six-sided die, `1..=6`
    fn roll_die(&mut self) -> u8;

    /// Uniform choice between the two driving directions
    fn choose_direction(&mut self) -> Direction;

    /// Uniform in-place shuffle of a card deck
    fn shuffle_cards(&mut self, deck: &mut [CardId]);
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn toss_coin(&mut self) -> Toss {
        (**self).toss_coin()
    }

    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }

    fn choose_direction(&mut self) -> Direction {
        (**self).choose_direction()
    }

    fn shuffle_cards(&mut self, deck: &mut [CardId]) {
        (**self).shuffle_cards(deck)
    }
}

/// ChaCha-backed random source with an optional fixed seed
pub struct SeededRandom {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl SeededRandom {
    /// Create a source with optional seed (None = OS entropy)
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };

        Self { rng, seed }
    }

    /// Reproducible source
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Non-reproducible source seeded from the OS
    pub fn from_entropy() -> Self {
        Self::new(None)
    }

    /// Seed this source was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn toss_coin(&mut self) -> Toss {
        if self.rng.random_bool(0.5) {
            Toss::Heads
        } else {
            Toss::Tails
        }
    }

    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }

    fn choose_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }

    fn shuffle_cards(&mut self, deck: &mut [CardId]) {
        deck.shuffle(&mut self.rng);
    }
}
