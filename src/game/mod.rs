//! Game facade and roll records.
//!
//! ## Key Types
//!
//! - `BowlingGame`: owns the roll log; `roll`, `reset`, and every score query
//! - `GameRecord`: serializable pin sequence that replays into a game

pub mod bowling;
pub mod record;

pub use bowling::BowlingGame;
pub use record::GameRecord;
