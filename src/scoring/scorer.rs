//! Lazy scorer over a roll log.
//!
//! Nothing is cached: every query walks the log. A game holds at most 21
//! rolls, so a full `score()` touches a few dozen entries.
//!
//! ## Frame scoring
//!
//! - Strike (frames 1-9): 10 plus the next two rolls, whatever frame they
//!   fall in.
//! - Spare (frames 1-9): 10 plus the next roll.
//! - Open frame: its own pins.
//! - Tenth frame: its own two or three rolls, no lookahead.
//!
//! Rolls not yet thrown count as 0, so a score taken mid-game is partial
//! rather than an error.

use smallvec::SmallVec;

use crate::core::{
    is_last_frame, is_spare, is_strike, LaneState, Rack, RollLog, BONUS_ROLL_IN_FRAME,
    FIRST_ROLL_IN_FRAME, LAST_FRAME, SECOND_ROLL_IN_FRAME,
};

/// Read-only view deriving game facts from a [`RollLog`].
#[derive(Clone, Copy, Debug)]
pub struct Scorer<'a> {
    log: &'a RollLog,
}

impl<'a> Scorer<'a> {
    /// Create a scorer over a log.
    #[must_use]
    pub fn new(log: &'a RollLog) -> Self {
        Self { log }
    }

    /// The underlying log.
    #[must_use]
    pub fn log(&self) -> &'a RollLog {
        self.log
    }

    // === Position ===

    /// Frame of the most recent roll (1..=10), 0 before any roll.
    #[must_use]
    pub fn current_frame(&self) -> u8 {
        self.log.frames_started()
    }

    /// Position of the most recent roll within its frame: 0 before any
    /// roll, then 1, 2, or 3 (tenth-frame bonus).
    #[must_use]
    pub fn current_roll_in_frame(&self) -> u8 {
        match self.log.frame_rolls(self.current_frame()).len() {
            0 => 0,
            1 => FIRST_ROLL_IN_FRAME,
            2 => SECOND_ROLL_IN_FRAME,
            _ => BONUS_ROLL_IN_FRAME,
        }
    }

    /// What the lane expects next.
    #[must_use]
    pub fn state(&self) -> LaneState {
        self.log.state()
    }

    /// Most pins the next roll may knock down.
    #[must_use]
    pub fn pins_standing(&self) -> u8 {
        self.log.pins_standing()
    }

    // === Predicates ===

    /// Check if the most recent roll felled a full rack.
    ///
    /// In the tenth frame the rack is reset after a strike or spare, so a
    /// ten on a bonus ball is a strike only when it meets ten standing pins.
    #[must_use]
    pub fn is_previous_roll_strike(&self) -> bool {
        match self.log.frame_rolls(self.current_frame()).split_last() {
            Some((&last, earlier)) => is_strike(last) && Rack::after(earlier).is_fresh(),
            None => false,
        }
    }

    /// Check if the most recent roll completed a spare in its frame's
    /// first two rolls.
    #[must_use]
    pub fn is_previous_frame_spare(&self) -> bool {
        match *self.log.frame_rolls(self.current_frame()) {
            [first, second] => is_spare(first, second),
            _ => false,
        }
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.log.is_complete()
    }

    // === Scores ===

    /// Total score through the current frame.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score_through(self.current_frame())
    }

    /// Cumulative score through the end of `frame`.
    ///
    /// Frames past 10 clamp to 10; frames not yet started add nothing.
    #[must_use]
    pub fn score_through(&self, frame: u8) -> u32 {
        (1..=frame.min(LAST_FRAME)).map(|f| self.frame_score(f)).sum()
    }

    /// Points contributed by a single frame, including any bonus rolls
    /// recorded so far.
    #[must_use]
    pub fn frame_score(&self, frame: u8) -> u32 {
        let Some(start) = self.log.frame_start(frame) else {
            return 0;
        };
        let rolls = self.log.frame_rolls(frame);
        let own: u32 = rolls.iter().map(|&pins| u32::from(pins)).sum();
        if is_last_frame(frame) {
            return own;
        }

        let bonus_rolls = match *rolls {
            [first] if is_strike(first) => 2,
            [first, second] if is_spare(first, second) => 1,
            _ => 0,
        };
        let next = start + rolls.len();
        own + (next..next + bonus_rolls).map(|i| self.pins_at(i)).sum::<u32>()
    }

    /// Cumulative score after each started frame.
    #[must_use]
    pub fn running_totals(&self) -> SmallVec<[u32; LAST_FRAME as usize]> {
        let mut total = 0;
        (1..=self.current_frame())
            .map(|frame| {
                total += self.frame_score(frame);
                total
            })
            .collect()
    }

    /// Check if every roll `frame`'s score depends on has been recorded.
    #[must_use]
    pub fn is_frame_final(&self, frame: u8) -> bool {
        let Some(start) = self.log.frame_start(frame) else {
            return false;
        };
        if is_last_frame(frame) {
            return self.is_over();
        }

        let rolls_needed = match *self.log.frame_rolls(frame) {
            [first] if is_strike(first) => 3,
            [first, second] if is_spare(first, second) => 3,
            [_, _] => 2,
            _ => return false,
        };
        self.log.roll_count() >= start + rolls_needed
    }

    fn pins_at(&self, index: usize) -> u32 {
        u32::from(self.log.roll_at(index).unwrap_or(0))
    }
}
