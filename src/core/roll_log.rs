//! Append-only record of pin counts, one entry per roll.
//!
//! ## Addressing
//!
//! Rolls are stored back to back with no padding: a strike in frames 1-9
//! takes one entry, every other frame before the tenth takes two, and
//! the tenth takes two or three. `frame_starts[f - 1]` holds the index of
//! frame `f`'s first roll, so frame lookups never depend on how many
//! strikes came before.
//!
//! ## Invariants
//!
//! - Every entry is in `0..=10`.
//! - A roll never knocks down more pins than were standing (frames 1-9
//!   cap the pair at 10; the tenth frame resets the rack after a strike
//!   or spare).
//! - The tenth frame gets a third roll only after a strike or spare.
//! - Nothing is appended once the game is over.

use smallvec::SmallVec;

use super::error::RollError;
use super::lane::{closes_frame, LaneState};
use super::pins::{
    is_frame, is_spare, is_strike, Rack, LAST_FRAME, MAX_PINS, MAX_ROLLS, MIN_PINS,
};

/// Validated roll history for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RollLog {
    /// Pin counts in the order they were rolled.
    rolls: SmallVec<[u8; MAX_ROLLS]>,

    /// Index into `rolls` of each started frame's first roll.
    frame_starts: [u8; LAST_FRAME as usize],

    /// Number of frames that have at least one roll (0..=10).
    frames_started: u8,
}

impl RollLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append one roll.
    ///
    /// Checks run in order: pin range, game over / unearned bonus, pins
    /// standing. On error the log is unchanged.
    pub fn append(&mut self, pins: i32) -> Result<(), RollError> {
        let pins = checked_pins(pins)?;

        let state = self.state();
        if state.is_terminal() {
            return Err(if self.frame_rolls(LAST_FRAME).len() == 2 {
                RollError::BonusNotEarned
            } else {
                RollError::GameAlreadyOver
            });
        }

        let standing = state.standing();
        if pins > standing {
            return Err(RollError::FrameOverflow {
                frame: state.frame().unwrap_or(LAST_FRAME),
                standing,
                pins,
            });
        }

        if let LaneState::AwaitingFirstRoll { frame } = state {
            // At most 20 rolls precede a frame start, fits in u8
            self.frame_starts[usize::from(frame - 1)] = self.rolls.len() as u8;
            self.frames_started = frame;
        }
        self.rolls.push(pins);
        Ok(())
    }

    /// Where the lane stands, derived from the recorded rolls.
    #[must_use]
    pub fn state(&self) -> LaneState {
        let frame = self.frames_started;
        if frame == 0 {
            return LaneState::AwaitingFirstRoll { frame: 1 };
        }

        let rolls = self.frame_rolls(frame);
        if frame < LAST_FRAME {
            return if closes_frame(rolls) {
                LaneState::AwaitingFirstRoll { frame: frame + 1 }
            } else {
                LaneState::AwaitingSecondRoll {
                    frame,
                    standing: Rack::after(rolls).standing(),
                }
            };
        }

        match *rolls {
            [first] if is_strike(first) => LaneState::AwaitingBonus1,
            [_] => LaneState::AwaitingSecondRoll {
                frame,
                standing: Rack::after(rolls).standing(),
            },
            [first, second] if is_strike(first) || is_spare(first, second) => {
                LaneState::AwaitingBonus2 {
                    standing: Rack::after(rolls).standing(),
                }
            }
            _ => LaneState::Terminal,
        }
    }

    /// Check if no further roll can be appended.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state().is_terminal()
    }

    /// Most pins the next roll may knock down (0 once complete).
    #[must_use]
    pub fn pins_standing(&self) -> u8 {
        self.state().standing()
    }

    /// Rack the next roll will be thrown at.
    #[must_use]
    pub fn rack(&self) -> Rack {
        if self.state().opens_frame() {
            Rack::fresh()
        } else {
            Rack::after(self.frame_rolls(self.frames_started))
        }
    }

    // === Read accessors ===

    /// All rolls in order.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Number of rolls appended.
    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Pin count of the roll at `index`, `None` if not yet rolled.
    #[must_use]
    pub fn roll_at(&self, index: usize) -> Option<u8> {
        self.rolls.get(index).copied()
    }

    /// Pin count of the most recent roll.
    pub fn pins_of_last_roll(&self) -> Result<u8, RollError> {
        self.rolls.last().copied().ok_or(RollError::NoRollsYet)
    }

    /// Number of frames with at least one roll.
    #[must_use]
    pub fn frames_started(&self) -> u8 {
        self.frames_started
    }

    /// Index of the first roll of `frame`, `None` if the frame hasn't started.
    #[must_use]
    pub fn frame_start(&self, frame: u8) -> Option<usize> {
        if is_frame(frame) && frame <= self.frames_started {
            Some(usize::from(self.frame_starts[usize::from(frame - 1)]))
        } else {
            None
        }
    }

    /// Rolls recorded for `frame` (empty if the frame hasn't started).
    #[must_use]
    pub fn frame_rolls(&self, frame: u8) -> &[u8] {
        let Some(start) = self.frame_start(frame) else {
            return &[];
        };
        let end = if frame < self.frames_started {
            usize::from(self.frame_starts[usize::from(frame)])
        } else {
            self.rolls.len()
        };
        &self.rolls[start..end]
    }
}

fn checked_pins(pins: i32) -> Result<u8, RollError> {
    if (i32::from(MIN_PINS)..=i32::from(MAX_PINS)).contains(&pins) {
        Ok(pins as u8)
    } else {
        Err(RollError::InvalidPinCount(pins))
    }
}
