//! Caller-owned instance behind a lock.

use std::sync::{Mutex, PoisonError};

use crate::distributions::{CatalogDistribution, RangeDistribution};
use crate::engine::{Engine, SeedSource};
use crate::error::{RandomError, Result};
use crate::generator::Generator;

/// One explicit stream shareable across threads.
///
/// Wraps a generator in a `Mutex` so draws take `&self`; put it in an `Arc`
/// to hand the same stream to several workers.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
///
/// use randgen_core::presets::SeededIntGen;
/// use randgen_core::shared::SyncGenerator;
///
/// let shared = Arc::new(SyncGenerator::new(SeededIntGen::<i32>::from_seed(1)));
/// let worker = {
///     let shared = Arc::clone(&shared);
///     thread::spawn(move || shared.range(0, 9).unwrap())
/// };
/// let here = shared.range(0, 9).unwrap();
/// let there = worker.join().unwrap();
/// assert!((0..=9).contains(&here) && (0..=9).contains(&there));
/// ```
#[derive(Debug, Default)]
pub struct SyncGenerator<G> {
    inner: Mutex<G>,
}

impl<G> SyncGenerator<G> {
    /// Wraps an existing generator.
    pub fn new(generator: G) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }

    /// Runs `f` against the wrapped generator while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut G) -> R) -> R {
        let mut generator = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut generator)
    }

    /// Unwraps the generator, keeping its stream position.
    pub fn into_inner(self) -> G {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<G> From<G> for SyncGenerator<G> {
    fn from(generator: G) -> Self {
        Self::new(generator)
    }
}

impl<T, D, E, S> SyncGenerator<Generator<T, D, E, S>>
where
    D: CatalogDistribution<Output = T>,
    E: Engine,
    S: SeedSource,
{
    /// Draws one value with the default parameters.
    #[inline]
    pub fn value(&self) -> T {
        self.with(Generator::value)
    }

    /// Draws one value with a one-shot parameter object.
    ///
    /// # Errors
    ///
    /// Returns the [`RandomError`] raised while validating `args`.
    #[inline]
    pub fn value_param<P>(&self, args: P) -> Result<T>
    where
        P: TryInto<D::Param, Error = RandomError>,
    {
        self.with(|generator| generator.value_param(args))
    }

    /// Returns the seed of the wrapped generator.
    pub fn seed(&self) -> u64 {
        self.with(|generator| generator.seed())
    }
}

impl<T, D, E, S> SyncGenerator<Generator<T, D, E, S>>
where
    D: RangeDistribution<Output = T>,
    E: Engine,
    S: SeedSource,
{
    /// Draws one value constrained to `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns the [`RandomError`] raised while validating the bounds.
    #[inline]
    pub fn range(&self, min: D::Bound, max: D::Bound) -> Result<T> {
        self.with(|generator| generator.range(min, max))
    }
}
