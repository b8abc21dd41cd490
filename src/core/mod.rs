//! Core engine types: pin constants, rack model, lane state, roll log, errors.
//!
//! The roll log is the only mutable state in a game. Everything else is
//! derived from it on demand.

pub mod error;
pub mod lane;
pub mod pins;
pub mod roll_log;

pub use error::RollError;
pub use lane::LaneState;
pub use pins::{
    is_frame, is_last_frame, is_spare, is_strike, Rack, BONUS_ROLL_IN_FRAME, FIRST_ROLL_IN_FRAME,
    LAST_FRAME, MAX_PINS, MAX_ROLLS, MIN_PINS, SECOND_ROLL_IN_FRAME, STRIKE_PINS,
};
pub use roll_log::RollLog;
