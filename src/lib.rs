//! # bowling-scorecard
//!
//! Ten-pin bowling roll recording and lazy scoring.
//!
//! ## Design Principles
//!
//! 1. **One Source of Truth**: The roll log is the only mutable state.
//!    Frame, roll position, predicates, and scores are derived from it on
//!    every query. Nothing is pre-aggregated, so nothing goes stale.
//!
//! 2. **Validate, Then Append**: A roll is checked against pin range,
//!    game over, tenth-frame bonus entitlement, and pins standing before
//!    it is written. A rejected roll leaves the game untouched.
//!
//! 3. **Lazy Scoring**: A strike or spare whose bonus rolls have not been
//!    thrown scores what has been recorded so far. `score()` never fails.
//!
//! ## Modules
//!
//! - `core`: Pin constants, rack model, lane state machine, roll log, errors
//! - `scoring`: `Scorer`, a read-only view over a roll log
//! - `game`: `BowlingGame` facade and serializable `GameRecord`
//! - `sim`: Simulated bowlers for tests and benchmarks
//!
//! ## Example
//!
//! ```
//! use bowling_scorecard::{BowlingGame, RollError};
//!
//! let mut game = BowlingGame::new();
//! for _ in 0..12 {
//!     game.roll(10).unwrap();
//! }
//!
//! assert_eq!(game.score(), 300);
//! assert!(game.is_over());
//! assert_eq!(game.roll(0), Err(RollError::GameAlreadyOver));
//! ```

pub mod core;
pub mod game;
pub mod scoring;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{LaneState, Rack, RollError, RollLog, LAST_FRAME, MAX_PINS, MAX_ROLLS};

pub use crate::scoring::Scorer;

pub use crate::game::{BowlingGame, GameRecord};

pub use crate::sim::{Bowler, GameRng, RandomBowler, SimConfig, SimStats, Simulation, SkilledBowler};
