//! Randomizer configuration

use serde::{Deserialize, Serialize};

use crate::random::SeededRandom;

/// Configuration for field draws
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomizerConfig {
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl RandomizerConfig {
    /// Reproducible draws from a fixed seed
    pub fn reproducible(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Builder: set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source matching this configuration
    pub fn build_source(&self) -> SeededRandom {
        SeededRandom::new(self.seed)
    }
}
