//! Errors surfaced by `roll()`.

use thiserror::Error;

/// Reasons a roll is rejected.
///
/// Every rejection leaves the roll log untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("pins per roll must be at least 0 and at most 10 but not {0}")]
    InvalidPinCount(i32),

    #[error("frame {frame} has only {standing} pins standing but {pins} were rolled")]
    FrameOverflow { frame: u8, standing: u8, pins: u8 },

    #[error("the tenth frame was neither a strike nor a spare, no bonus roll earned")]
    BonusNotEarned,

    #[error("game is over")]
    GameAlreadyOver,

    #[error("no rolls recorded yet")]
    NoRollsYet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_values() {
        assert_eq!(
            RollError::InvalidPinCount(11).to_string(),
            "pins per roll must be at least 0 and at most 10 but not 11"
        );
        assert_eq!(
            RollError::FrameOverflow { frame: 3, standing: 4, pins: 5 }.to_string(),
            "frame 3 has only 4 pins standing but 5 were rolled"
        );
        assert_eq!(RollError::GameAlreadyOver.to_string(), "game is over");
    }
}
