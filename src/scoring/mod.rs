//! Scoring: derive position, predicates, and scores from a roll log.
//!
//! The scorer borrows the log immutably. It never caches and never
//! mutates, so queries are idempotent between rolls.

pub mod scorer;

pub use scorer::Scorer;
