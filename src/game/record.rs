//! Serializable roll sequence.
//!
//! A record stores pin counts only. It is trusted for nothing: turning it
//! back into a game runs every roll through validation again.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{RollError, RollLog, MAX_ROLLS};

use super::bowling::BowlingGame;

/// Pin counts of a (possibly unfinished) game, in roll order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    rolls: SmallVec<[u8; MAX_ROLLS]>,
}

impl GameRecord {
    /// Capture the rolls in a log.
    #[must_use]
    pub fn from_log(log: &RollLog) -> Self {
        Self {
            rolls: SmallVec::from_slice(log.rolls()),
        }
    }

    /// Wrap raw pin counts. Nothing is checked until [`replay`](Self::replay).
    #[must_use]
    pub fn from_rolls(rolls: &[u8]) -> Self {
        Self {
            rolls: SmallVec::from_slice(rolls),
        }
    }

    /// Recorded pin counts.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Number of recorded rolls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Rebuild the game, validating every roll.
    pub fn replay(&self) -> Result<BowlingGame, RollError> {
        let mut game = BowlingGame::new();
        for &pins in &self.rolls {
            game.roll(i32::from(pins))?;
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_matches_game() {
        let played = BowlingGame::replay(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1])
            .unwrap();
        let record = played.record();

        assert_eq!(record.len(), 17);
        let replayed = record.replay().unwrap();
        assert_eq!(replayed, played);
        assert_eq!(replayed.score(), 167);
        assert!(replayed.is_over());
    }

    #[test]
    fn test_replay_rejects_illegal_record() {
        let record = GameRecord::from_rolls(&[6, 6]);
        assert_eq!(
            record.replay(),
            Err(RollError::FrameOverflow { frame: 1, standing: 4, pins: 6 })
        );

        let record = GameRecord::from_rolls(&[0; 21]);
        assert_eq!(record.replay(), Err(RollError::GameAlreadyOver));
    }

    #[test]
    fn test_record_serialization() {
        let record = GameRecord::from_rolls(&[10, 3, 4]);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: GameRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
        assert!(GameRecord::default().is_empty());
    }
}
