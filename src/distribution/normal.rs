use std::fmt;

use rand::{Rng, RngCore};
use tracing::trace;

use super::Distribution;
use crate::error::{Error, Result};

/// Normal distribution sampled with the Marsaglia polar form of Box-Muller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Fails with [`Error::InvalidConfiguration`] unless `mean` is finite and
    /// `std_dev` is finite and positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(Error::InvalidConfiguration { mean, std_dev });
        }
        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Both deviates produced by one accepted polar pair.
    ///
    /// [`Distribution::sample`] returns the first element and drops the
    /// second, so mixing the two calls on one source changes the sequence.
    pub fn sample_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let (z0, z1) = standard_polar_pair(rng);
        (self.scale(z0), self.scale(z1))
    }

    #[inline]
    fn scale(&self, z: f64) -> f64 {
        self.mean + self.std_dev * z
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Normal(mean={}, std_dev={})", self.mean, self.std_dev)
    }
}

impl Distribution for Normal {
    type Value = f64;

    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        self.scale(standard_polar_pair(rng).0)
    }
}

impl rand_distr::Distribution<f64> for Normal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.scale(standard_polar_pair(rng).0)
    }
}

/// Draws points uniformly from the square [-1, 1) x [-1, 1) until one lands
/// strictly inside the unit disk, excluding the origin, then maps it to two
/// independent standard normal deviates.
fn standard_polar_pair<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    loop {
        let u1 = 2.0 * rng.gen::<f64>() - 1.0;
        let u2 = 2.0 * rng.gen::<f64>() - 1.0;
        let w = u1 * u1 + u2 * u2;
        if w >= 1.0 || w == 0.0 {
            trace!(u1, u2, w, "rejected polar pair");
            continue;
        }
        let factor = (-2.0 * w.ln() / w).sqrt();
        return (u1 * factor, u2 * factor);
    }
}
