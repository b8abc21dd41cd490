//! Seeded randomness for simulated bowlers.
//!
//! A batch of games shares one root `GameRng`. Each game draws its own
//! stream with [`GameRng::fork`], so game `n` of a batch depends only on
//! the root seed and `n`, never on how many balls earlier games threw.
//!
//! ```
//! use bowling_scorecard::sim::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let mut lane = root.fork();
//!
//! assert!(lane.gen_pins(10) <= 10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream that picks pin counts and skill outcomes.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Split off a child stream seeded from this one.
    ///
    /// The parent advances by one draw per fork; children never touch it.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.gen())
    }

    /// Uniform pin count in `0..=max`.
    pub fn gen_pins(&mut self, max: u8) -> u8 {
        self.inner.gen_range(0..=max)
    }

    /// True with the given probability. Values outside 0..=1 clamp; NaN is false.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(rng: &mut GameRng, n: usize) -> Vec<u8> {
        (0..n).map(|_| rng.gen_pins(10)).collect()
    }

    #[test]
    fn test_same_seed_same_pins() {
        assert_eq!(draw(&mut GameRng::new(42), 100), draw(&mut GameRng::new(42), 100));
    }

    #[test]
    fn test_gen_pins_in_range() {
        let mut rng = GameRng::new(7);
        for max in 0..=10 {
            for _ in 0..50 {
                assert!(rng.gen_pins(max) <= max);
            }
        }
        assert_eq!(rng.gen_pins(0), 0);
    }

    #[test]
    fn test_forks_replay_per_index() {
        let mut first = GameRng::new(42);
        let mut second = GameRng::new(42);

        let lanes_a: Vec<_> = (0..3).map(|_| draw(&mut first.fork(), 20)).collect();
        let lanes_b: Vec<_> = (0..3).map(|_| draw(&mut second.fork(), 20)).collect();

        assert_eq!(lanes_a, lanes_b);
        assert_ne!(lanes_a[0], lanes_a[1]);
    }

    #[test]
    fn test_fork_ignores_child_draws() {
        let mut busy = GameRng::new(9);
        let mut idle = GameRng::new(9);

        draw(&mut busy.fork(), 50);
        let _ = idle.fork();

        assert_eq!(draw(&mut busy.fork(), 20), draw(&mut idle.fork(), 20));
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(1);
        for _ in 0..20 {
            assert!(rng.gen_bool(1.0));
            assert!(rng.gen_bool(2.5));
            assert!(!rng.gen_bool(0.0));
            assert!(!rng.gen_bool(-1.0));
            assert!(!rng.gen_bool(f64::NAN));
        }
    }
}
