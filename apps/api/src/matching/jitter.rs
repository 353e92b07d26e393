//! Score jitter — the stochastic adjustment applied on top of the raw
//! skill-overlap ratio. Injected so tests can pin it.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default half-width of the jitter interval.
pub const DEFAULT_AMPLITUDE: f64 = 0.05;

/// A source of score jitter. Each sample must lie in `[-a, +a]` for the
/// source's amplitude `a`.
pub trait Jitter: Send + Sync {
    fn sample(&self) -> f64;
}

/// Always zero. Selected when `MATCH_JITTER` is 0, so scores are the raw
/// overlap ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn sample(&self) -> f64 {
        0.0
    }
}

/// Uniform jitter in `[-amplitude, +amplitude]` drawn from a seedable generator.
#[derive(Debug)]
pub struct UniformJitter {
    amplitude: f64,
    rng: Mutex<StdRng>,
}

impl UniformJitter {
    pub fn new(amplitude: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            amplitude: amplitude.abs(),
            rng: Mutex::new(rng),
        }
    }
}

impl Jitter for UniformJitter {
    fn sample(&self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        // Poisoning leaves the generator state intact.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(-self.amplitude..=self.amplitude)
    }
}

/// Fixed offset.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

#[cfg(test)]
impl Jitter for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}
