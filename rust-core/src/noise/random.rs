//! Random source capability used by the noise generators
//!
//! Generators only ever see the [`RandomSource`] trait, so tests can drive
//! them from scripted sequences while production code uses a seedable
//! ChaCha stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Geometric, StandardNormal};

use crate::error::{NoiseError, Result};

/// The primitives a noise generator may draw from
pub trait RandomSource {
    /// Uniform real in [0, 1)
    fn uniform(&mut self) -> f64;

    /// Number of Bernoulli(p) trials up to and including the first success
    ///
    /// Support is {1, 2, ...}. Fails when `p` is not in (0, 1].
    fn geometric(&mut self, p: f64) -> Result<u64>;

    /// Uniform integer in [0, upper); `upper` must be non-zero
    fn uniform_index(&mut self, upper: usize) -> usize;

    /// Draw from N(0, 1)
    fn standard_normal(&mut self) -> f64;
}

/// [`RandomSource`] backed by any `rand` generator
pub struct RngSource<R = ChaCha8Rng> {
    rng: R,

    /// Last geometric distribution built, keyed by its success probability
    geometric: Option<(f64, Geometric)>,
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible source: the same seed always yields the same stream
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            geometric: None,
        }
    }

    fn geometric_distribution(&mut self, p: f64) -> Result<Geometric> {
        if let Some((cached_p, dist)) = self.geometric {
            if cached_p == p {
                return Ok(dist);
            }
        }
        if !(p > 0.0 && p <= 1.0) {
            return Err(NoiseError::invalid(
                "p",
                format!("geometric success probability must be in (0, 1], got {}", p),
            ));
        }
        let dist = Geometric::new(p).map_err(|e| NoiseError::invalid("p", e.to_string()))?;
        self.geometric = Some((p, dist));
        Ok(dist)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn geometric(&mut self, p: f64) -> Result<u64> {
        let dist = self.geometric_distribution(p)?;
        // rand_distr counts failures before the first success
        Ok(dist.sample(&mut self.rng) + 1)
    }

    fn uniform_index(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "uniform_index needs a non-empty range");
        self.rng.gen_range(0..upper)
    }

    fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}
