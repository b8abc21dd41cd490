//! Per-frame roll state machine.
//!
//! Frames 1-9:
//! - `AwaitingFirstRoll` --strike--> `AwaitingFirstRoll` (next frame)
//! - `AwaitingFirstRoll` --other--> `AwaitingSecondRoll` --> `AwaitingFirstRoll` (next frame)
//!
//! Frame 10:
//! - `AwaitingFirstRoll` --strike--> `AwaitingBonus1` --> `AwaitingBonus2` --> `Terminal`
//! - `AwaitingFirstRoll` --other--> `AwaitingSecondRoll` --spare--> `AwaitingBonus2` --> `Terminal`
//! - `AwaitingSecondRoll` --open--> `Terminal`

use super::pins::{is_strike, LAST_FRAME, MAX_PINS};

/// What the lane expects next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaneState {
    /// Waiting for the first ball of `frame` on a fresh rack.
    AwaitingFirstRoll { frame: u8 },

    /// Waiting for the second ball of `frame` at the pins left standing.
    AwaitingSecondRoll { frame: u8, standing: u8 },

    /// Tenth frame opened with a strike; the next ball sees a fresh rack.
    AwaitingBonus1,

    /// Tenth frame earned its third ball.
    AwaitingBonus2 { standing: u8 },

    /// Game over. No more rolls.
    Terminal,
}

impl LaneState {
    /// Frame the next roll belongs to, `None` once terminal.
    #[must_use]
    pub fn frame(self) -> Option<u8> {
        match self {
            LaneState::AwaitingFirstRoll { frame } | LaneState::AwaitingSecondRoll { frame, .. } => {
                Some(frame)
            }
            LaneState::AwaitingBonus1 | LaneState::AwaitingBonus2 { .. } => Some(LAST_FRAME),
            LaneState::Terminal => None,
        }
    }

    /// Most pins the next roll may knock down.
    #[must_use]
    pub fn standing(self) -> u8 {
        match self {
            LaneState::AwaitingFirstRoll { .. } | LaneState::AwaitingBonus1 => MAX_PINS,
            LaneState::AwaitingSecondRoll { standing, .. } | LaneState::AwaitingBonus2 { standing } => {
                standing
            }
            LaneState::Terminal => 0,
        }
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == LaneState::Terminal
    }

    /// Check if the next roll opens a new frame.
    #[must_use]
    pub fn opens_frame(self) -> bool {
        matches!(self, LaneState::AwaitingFirstRoll { .. })
    }
}

/// Whether a frame before the tenth is finished after these rolls.
pub(crate) fn closes_frame(rolls: &[u8]) -> bool {
    match rolls {
        [first] => is_strike(*first),
        [_, _, ..] => true,
        [] => false,
    }
}
