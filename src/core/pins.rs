//! Pin and frame constants plus the rack model.
//!
//! A [`Rack`] tracks how many pins stand on the deck. Every legality
//! check in the roll log and every strike/spare predicate in the scorer
//! is phrased in terms of it, so the tenth frame's pin resets fall out
//! of the same rule as frames 1-9.

/// Number of frames in a game.
pub const LAST_FRAME: u8 = 10;

/// Fewest pins a single roll can knock down.
pub const MIN_PINS: u8 = 0;

/// Pins on a full rack.
pub const MAX_PINS: u8 = 10;

/// Pins felled by a strike.
pub const STRIKE_PINS: u8 = MAX_PINS;

/// Most rolls a game can hold: two per frame plus one tenth-frame bonus.
pub const MAX_ROLLS: usize = 2 * LAST_FRAME as usize + 1;

/// Roll-in-frame position of a frame's first ball.
pub const FIRST_ROLL_IN_FRAME: u8 = 1;

/// Roll-in-frame position of a frame's second ball.
pub const SECOND_ROLL_IN_FRAME: u8 = 2;

/// Roll-in-frame position of the tenth frame's bonus ball.
pub const BONUS_ROLL_IN_FRAME: u8 = 3;

/// Check if a frame number addresses a real frame (1..=10).
#[must_use]
pub const fn is_frame(frame: u8) -> bool {
    1 <= frame && frame <= LAST_FRAME
}

/// Check if a frame number is the tenth frame.
#[must_use]
pub const fn is_last_frame(frame: u8) -> bool {
    frame == LAST_FRAME
}

/// Check if a pin count is a strike.
#[must_use]
pub const fn is_strike(pins: u8) -> bool {
    pins == STRIKE_PINS
}

/// Check if two rolls form a spare (not a strike, ten pins together).
#[must_use]
pub const fn is_spare(first: u8, second: u8) -> bool {
    first < STRIKE_PINS && first + second == MAX_PINS
}

/// Pins standing on the deck, plus how many balls were thrown at them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rack {
    standing: u8,
    balls: u8,
}

impl Default for Rack {
    fn default() -> Self {
        Self::fresh()
    }
}

impl Rack {
    /// A full rack of ten pins.
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            standing: MAX_PINS,
            balls: 0,
        }
    }

    /// Replay rolls onto a fresh rack.
    ///
    /// The rolls must already be legal; counts above the standing pins
    /// saturate at zero.
    #[must_use]
    pub fn after(rolls: &[u8]) -> Self {
        rolls.iter().fold(Self::fresh(), |rack, &pins| rack.knock(pins))
    }

    /// Pins left standing.
    #[must_use]
    pub const fn standing(self) -> u8 {
        self.standing
    }

    /// No ball has been thrown at this rack yet.
    #[must_use]
    pub const fn is_fresh(self) -> bool {
        self.balls == 0
    }

    /// Throw a ball. The rack resets once cleared or after two balls.
    #[must_use]
    pub fn knock(self, pins: u8) -> Self {
        let standing = self.standing.saturating_sub(pins);
        let balls = self.balls + 1;
        if standing == 0 || balls == 2 {
            Self::fresh()
        } else {
            Self { standing, balls }
        }
    }
}
