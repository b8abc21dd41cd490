//! Simulated bowlers.
//!
//! A bowler picks a pin count for the rack in front of it. Bowlers are
//! trait-based so tests and benches can swap in their own.

use crate::core::Rack;

use super::rng::GameRng;

/// Chooses how many pins the next ball knocks down.
pub trait Bowler {
    /// Pins knocked down by the next ball. Must be in `0..=rack.standing()`.
    fn next_roll(&self, rack: Rack, rng: &mut GameRng) -> u8;
}

/// Knocks down a uniform number of the standing pins.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBowler;

impl Bowler for RandomBowler {
    fn next_roll(&self, rack: Rack, rng: &mut GameRng) -> u8 {
        rng.gen_pins(rack.standing())
    }
}

/// Clears the rack with a fixed probability, otherwise leaves at least
/// one pin standing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkilledBowler {
    /// Chance of a strike on a fresh rack.
    pub strike_probability: f64,
    /// Chance of a spare after the first ball.
    pub spare_probability: f64,
}

impl SkilledBowler {
    #[must_use]
    pub fn new(strike_probability: f64, spare_probability: f64) -> Self {
        Self {
            strike_probability,
            spare_probability,
        }
    }
}

impl Bowler for SkilledBowler {
    fn next_roll(&self, rack: Rack, rng: &mut GameRng) -> u8 {
        let standing = rack.standing();
        let probability = if rack.is_fresh() {
            self.strike_probability
        } else {
            self.spare_probability
        };

        if rng.gen_bool(probability) {
            standing
        } else {
            rng.gen_pins(standing.saturating_sub(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bowler_respects_rack() {
        let mut rng = GameRng::new(42);
        let rack = Rack::fresh().knock(6);

        for _ in 0..100 {
            assert!(RandomBowler.next_roll(rack, &mut rng) <= 4);
        }
    }

    #[test]
    fn test_perfect_bowler_always_clears() {
        let mut rng = GameRng::new(42);
        let bowler = SkilledBowler::new(1.0, 1.0);

        assert_eq!(bowler.next_roll(Rack::fresh(), &mut rng), 10);
        assert_eq!(bowler.next_roll(Rack::fresh().knock(3), &mut rng), 7);
    }

    #[test]
    fn test_hopeless_bowler_never_clears() {
        let mut rng = GameRng::new(42);
        let bowler = SkilledBowler::new(0.0, 0.0);

        for _ in 0..100 {
            assert!(bowler.next_roll(Rack::fresh(), &mut rng) < 10);
            assert!(bowler.next_roll(Rack::fresh().knock(2), &mut rng) < 8);
        }
    }
}
