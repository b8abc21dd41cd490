//! Aggregate results over simulated games.

use serde::{Deserialize, Serialize};

use crate::core::{is_spare, is_strike, LAST_FRAME};
use crate::game::BowlingGame;

/// Totals collected across games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    /// Games recorded.
    pub games: u32,

    /// Sum of final scores.
    pub total_score: u64,

    /// Highest final score.
    pub best: u32,

    /// Lowest final score (0 until a game is recorded).
    pub worst: u32,

    /// Games scoring 300.
    pub perfect_games: u32,

    /// Frames opened with a strike.
    pub strikes: u32,

    /// Frames closed with a spare.
    pub spares: u32,
}

impl SimStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one game into the totals.
    pub fn record_game(&mut self, game: &BowlingGame) {
        let score = game.score();

        self.worst = if self.games == 0 { score } else { self.worst.min(score) };
        self.best = self.best.max(score);
        self.games += 1;
        self.total_score += u64::from(score);
        if score == 300 {
            self.perfect_games += 1;
        }

        for frame in 1..=LAST_FRAME {
            match *game.log().frame_rolls(frame) {
                [first, ..] if is_strike(first) => self.strikes += 1,
                [first, second, ..] if is_spare(first, second) => self.spares += 1,
                _ => {}
            }
        }
    }

    /// Average final score.
    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games)
        }
    }
}
