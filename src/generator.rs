use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::{debug, instrument, Level};

use crate::distribution::Distribution;
use crate::error::{Error, Result};

/// Binds a random source to a distribution and draws values from it.
///
/// The distribution is never mutated after construction; only the random
/// source advances. A shared source can be injected as `&mut R`.
///
/// Drawing needs `&mut self`, so a generator shared across threads has to be
/// wrapped in a lock by the caller.
#[derive(Debug)]
pub struct Generator<D, R = StdRng> {
    rng: R,
    distribution: D,
}

impl<D: Distribution + Default> Generator<D, StdRng> {
    /// Default distribution, entropy-seeded source.
    #[instrument(level = Level::DEBUG, target = "generator::new")]
    pub fn new() -> Self {
        Self::with_distribution(D::default())
    }

    /// Default distribution, deterministic source.
    #[instrument(level = Level::DEBUG, target = "generator::seeded")]
    pub fn seeded(seed: u64) -> Self {
        Self::seeded_with(seed, D::default())
    }
}

impl<D: Distribution + Default> Default for Generator<D, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Distribution> Generator<D, StdRng> {
    pub fn with_distribution(distribution: D) -> Self {
        debug!("seeding generator from OS entropy");
        Self::from_parts(StdRng::from_entropy(), distribution)
    }

    pub fn seeded_with(seed: u64, distribution: D) -> Self {
        debug!(seed, "seeding generator");
        Self::from_parts(StdRng::seed_from_u64(seed), distribution)
    }
}

impl<D: Distribution, R: RngCore> Generator<D, R> {
    pub fn from_parts(rng: R, distribution: D) -> Self {
        Self { rng, distribution }
    }

    pub fn builder() -> GeneratorBuilder<D, R> {
        GeneratorBuilder::new()
    }

    /// Draws one value. Only the random source's state changes.
    pub fn next_value(&mut self) -> D::Value {
        self.distribution.sample(&mut self.rng)
    }

    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    pub fn into_parts(self) -> (R, D) {
        (self.rng, self.distribution)
    }
}

/// Never exhausts.
impl<D: Distribution, R: RngCore> Iterator for Generator<D, R> {
    type Item = D::Value;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_value())
    }
}

/// Collects an injected random source and distribution, either of which may
/// be absent until [`GeneratorBuilder::build`] checks them.
pub struct GeneratorBuilder<D, R> {
    rng: Option<R>,
    distribution: Option<D>,
}

impl<D, R> Default for GeneratorBuilder<D, R> {
    fn default() -> Self {
        Self {
            rng: None,
            distribution: None,
        }
    }
}

impl<D: Distribution, R: RngCore> GeneratorBuilder<D, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rng(mut self, rng: R) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn distribution(mut self, distribution: D) -> Self {
        self.distribution = Some(distribution);
        self
    }

    /// Fails with [`Error::MissingArgument`] naming the first absent part.
    pub fn build(self) -> Result<Generator<D, R>> {
        let rng = self.rng.ok_or(Error::MissingArgument("rng"))?;
        let distribution = self
            .distribution
            .ok_or(Error::MissingArgument("distribution"))?;
        Ok(Generator::from_parts(rng, distribution))
    }
}
