//! Field randomizer: owns the random source and hands out draws

use fe_core::FieldResult;

use crate::config::RandomizerConfig;
use crate::obstacle::{Configuration, generate_obstacle};
use crate::open::{OpenConfiguration, generate_open};
use crate::random::{RandomSource, SeededRandom};

/// Field randomizer
///
/// Every draw advances the same random source, so a seeded randomizer
/// produces the same sequence of draws on every run.
pub struct FieldRandomizer<R: RandomSource = SeededRandom> {
    source: R,
    draws: u64,
}

impl FieldRandomizer<SeededRandom> {
    /// Create with OS entropy
    pub fn new() -> Self {
        Self::with_source(SeededRandom::from_entropy())
    }

    /// Create from configuration
    pub fn with_config(config: &RandomizerConfig) -> Self {
        Self::with_source(config.build_source())
    }

    /// Reset to a fixed seed; the draw count starts over
    pub fn seed(&mut self, seed: u64) {
        self.source = SeededRandom::from_seed(seed);
        self.draws = 0;
    }
}

impl Default for FieldRandomizer<SeededRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> FieldRandomizer<R> {
    /// Create around any random source
    pub fn with_source(source: R) -> Self {
        Self { source, draws: 0 }
    }

    /// Draw an obstacle challenge configuration
    pub fn obstacle(&mut self) -> Configuration {
        self.draws += 1;
        generate_obstacle(&mut self.source)
    }

    /// Draw an open challenge configuration
    pub fn open(&mut self) -> FieldResult<OpenConfiguration> {
        self.draws += 1;
        generate_open(&mut self.source)
    }

    /// Number of draws made so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn source(&self) -> &R {
        &self.source
    }
}
