//! The bowling game facade: one roll log, queried through a scorer.

use tracing::{debug, info};

use crate::core::{LaneState, RollError, RollLog};
use crate::scoring::Scorer;

use super::record::GameRecord;

/// A single bowler's game.
///
/// ## Example
///
/// ```
/// use bowling_scorecard::BowlingGame;
///
/// let mut game = BowlingGame::new();
/// game.roll(10).unwrap();
/// game.roll(3).unwrap();
/// game.roll(4).unwrap();
///
/// assert_eq!(game.score_through(1), 17);
/// assert_eq!(game.score(), 24);
/// assert!(game.roll(11).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BowlingGame {
    log: RollLog,
}

impl BowlingGame {
    /// Create a game with no rolls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a game by rolling every pin count in order.
    ///
    /// Stops at the first rejected roll.
    pub fn replay(rolls: &[i32]) -> Result<Self, RollError> {
        let mut game = Self::new();
        for &pins in rolls {
            game.roll(pins)?;
        }
        Ok(game)
    }

    /// Record a roll.
    ///
    /// Fails with `GameAlreadyOver` once the game has ended, otherwise
    /// with whatever the roll log rejects. A failed roll changes nothing.
    pub fn roll(&mut self, pins: i32) -> Result<(), RollError> {
        let result = if self.is_over() {
            Err(RollError::GameAlreadyOver)
        } else {
            self.log.append(pins)
        };

        match result {
            Ok(()) => {
                debug!(
                    pins,
                    frame = self.current_frame(),
                    roll_in_frame = self.current_roll_in_frame(),
                    "roll recorded"
                );
                if self.is_over() {
                    info!(score = self.score(), rolls = self.log.roll_count(), "game over");
                }
            }
            Err(err) => debug!(pins, error = %err, "roll rejected"),
        }
        result
    }

    /// Start over with an empty game.
    pub fn reset(&mut self) {
        debug!(rolls = self.log.roll_count(), "game reset");
        *self = Self::new();
    }

    /// Scorer over this game's rolls.
    #[must_use]
    pub fn scorer(&self) -> Scorer<'_> {
        Scorer::new(&self.log)
    }

    /// The underlying roll log.
    #[must_use]
    pub fn log(&self) -> &RollLog {
        &self.log
    }

    /// Snapshot the rolls so far.
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord::from_log(&self.log)
    }

    // === Queries (see `Scorer`) ===

    /// Frame of the most recent roll, 0 before any roll.
    #[must_use]
    pub fn current_frame(&self) -> u8 {
        self.scorer().current_frame()
    }

    /// Position of the most recent roll within its frame (0..=3).
    #[must_use]
    pub fn current_roll_in_frame(&self) -> u8 {
        self.scorer().current_roll_in_frame()
    }

    /// Check if the most recent roll felled a full rack.
    #[must_use]
    pub fn is_previous_roll_strike(&self) -> bool {
        self.scorer().is_previous_roll_strike()
    }

    /// Check if the most recent roll completed a spare.
    #[must_use]
    pub fn is_previous_frame_spare(&self) -> bool {
        self.scorer().is_previous_frame_spare()
    }

    /// Cumulative score through `frame`.
    #[must_use]
    pub fn score_through(&self, frame: u8) -> u32 {
        self.scorer().score_through(frame)
    }

    /// Score through the current frame.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.scorer().score()
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.scorer().is_over()
    }

    /// Most pins the next roll may knock down (0 once over).
    #[must_use]
    pub fn pins_standing(&self) -> u8 {
        self.log.pins_standing()
    }

    /// What the lane expects next.
    #[must_use]
    pub fn state(&self) -> LaneState {
        self.log.state()
    }
}
