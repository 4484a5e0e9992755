// src/generator/rng.rs

use rand::Rng;

/// The draws the random walk needs. Every `rand::Rng` provides them; tests
/// substitute a scripted source to pin down exact cell sequences.
pub trait WalkRng {
    /// Uniform draw from [0, 1).
    fn unit(&mut self) -> f64;

    /// Uniform draw from {1, 2, 3, 4}.
    fn roll(&mut self) -> u8;
}

impl<R: Rng> WalkRng for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn roll(&mut self) -> u8 {
        self.random_range(1..=4)
    }
}
