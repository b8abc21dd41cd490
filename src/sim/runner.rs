//! Plays simulated games through the public `roll` API.

use tracing::debug;

use crate::core::RollError;
use crate::game::{BowlingGame, GameRecord};

use super::bowler::{Bowler, SkilledBowler};
use super::config::SimConfig;
use super::rng::GameRng;
use super::stats::SimStats;

/// Runs batches of games for one bowler.
#[derive(Clone, Debug)]
pub struct Simulation<B: Bowler> {
    bowler: B,
    config: SimConfig,
}

impl Simulation<SkilledBowler> {
    /// Simulation with the config's skilled bowler.
    #[must_use]
    pub fn from_config(config: SimConfig) -> Self {
        Self::new(config.bowler(), config)
    }
}

impl<B: Bowler> Simulation<B> {
    pub fn new(bowler: B, config: SimConfig) -> Self {
        Self { bowler, config }
    }

    /// Play one full game.
    ///
    /// Fails only if the bowler returns more pins than are standing.
    pub fn play_game(&self, rng: &mut GameRng) -> Result<BowlingGame, RollError> {
        let mut game = BowlingGame::new();
        while !game.is_over() {
            let pins = self.bowler.next_roll(game.log().rack(), rng);
            game.roll(i32::from(pins))?;
        }
        Ok(game)
    }

    /// Play `config.games` games, one RNG fork each.
    pub fn play_games(&self) -> Result<Vec<GameRecord>, RollError> {
        let mut rng = GameRng::new(self.config.seed);
        (0..self.config.games)
            .map(|_| self.play_game(&mut rng.fork()).map(|game| game.record()))
            .collect()
    }

    /// Play `config.games` games and aggregate the results.
    pub fn run(&self) -> Result<SimStats, RollError> {
        let mut rng = GameRng::new(self.config.seed);
        let mut stats = SimStats::new();
        for _ in 0..self.config.games {
            let game = self.play_game(&mut rng.fork())?;
            stats.record_game(&game);
        }

        debug!(
            games = stats.games,
            mean = stats.mean_score(),
            best = stats.best,
            worst = stats.worst,
            "simulation finished"
        );
        Ok(stats)
    }
}
