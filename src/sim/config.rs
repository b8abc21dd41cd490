//! Simulation configuration.

use serde::{Deserialize, Serialize};

use super::bowler::SkilledBowler;

/// Parameters for a batch of simulated games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of games to play.
    pub games: usize,

    /// Root seed. Each game gets its own fork.
    pub seed: u64,

    /// Chance of clearing a fresh rack with one ball.
    pub strike_probability: f64,

    /// Chance of clearing the pins left after a first ball.
    pub spare_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            seed: 42,
            strike_probability: 0.3,
            spare_probability: 0.5,
        }
    }
}

impl SimConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the root seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the strike probability.
    pub fn with_strike_probability(mut self, probability: f64) -> Self {
        self.strike_probability = probability;
        self
    }

    /// Set the spare probability.
    pub fn with_spare_probability(mut self, probability: f64) -> Self {
        self.spare_probability = probability;
        self
    }

    /// Bowler with this config's skill.
    #[must_use]
    pub fn bowler(&self) -> SkilledBowler {
        SkilledBowler::new(self.strike_probability, self.spare_probability)
    }
}
