//! Simulated bowling for tests and benchmarks.
//!
//! ## Key Types
//!
//! - `GameRng`: seeded ChaCha8 RNG, forked once per game
//! - `Bowler`: picks pins for the rack in front of it (`RandomBowler`, `SkilledBowler`)
//! - `SimConfig`: number of games, seed, bowler skill
//! - `Simulation`: plays games through `BowlingGame::roll`
//! - `SimStats`: score and strike/spare totals
//!
//! ## Example
//!
//! ```
//! use bowling_scorecard::sim::{SimConfig, Simulation};
//!
//! let config = SimConfig::default().with_games(10).with_seed(7);
//! let stats = Simulation::from_config(config).run().unwrap();
//!
//! assert_eq!(stats.games, 10);
//! assert!(stats.best <= 300);
//! ```

pub mod bowler;
pub mod config;
pub mod rng;
pub mod runner;
pub mod stats;

pub use bowler::{Bowler, RandomBowler, SkilledBowler};
pub use config::SimConfig;
pub use rng::GameRng;
pub use runner::Simulation;
pub use stats::SimStats;
