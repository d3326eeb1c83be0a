pub mod normal;

use rand::RngCore;

/// A probability law that turns uniform random bits into one sample.
///
/// The random source is passed as a trait object so that boxed
/// distributions stay usable behind `Box<dyn Distribution>`.
pub trait Distribution {
    type Value;

    fn sample(&self, rng: &mut dyn RngCore) -> Self::Value;
}

impl<T> Distribution for Box<dyn Distribution<Value = T>> {
    type Value = T;

    fn sample(&self, rng: &mut dyn RngCore) -> T {
        self.as_ref().sample(rng)
    }
}
