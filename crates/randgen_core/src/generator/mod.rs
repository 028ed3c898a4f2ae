//! # Generator
//!
//! [`Generator`] binds one catalog distribution, one engine and one seed
//! source into an owned, callable object.
//!
//! ## Construction Order
//!
//! 1. The seed source is constructed (or injected) and invoked once
//! 2. The engine is initialised from that single seed value
//! 3. The distribution is default-constructed
//!
//! The engine is never reseeded afterwards, and per-call parameters are
//! never written back into the distribution.
//!
//! ## Usage Example
//!
//! ```rust
//! use randgen_core::distributions::{Gaussian, UniformInt};
//! use randgen_core::engine::ExplicitSeed;
//! use randgen_core::Generator;
//! use rand::rngs::SmallRng;
//!
//! let mut ids: Generator<u16, UniformInt<u16>, SmallRng, ExplicitSeed> =
//!     Generator::from_seed(7);
//! let id = ids.range(1, 500).unwrap();
//! assert!((1..=500).contains(&id));
//!
//! let mut noise: Generator<f64, Gaussian<f64>> = Generator::new();
//! let shifted = noise.value_param((10.0, 0.5)).unwrap();
//! assert!(shifted.is_finite());
//! ```

use std::any::type_name;
use std::marker::PhantomData;

use crate::distributions::{CatalogDistribution, RangeDistribution};
use crate::engine::{DefaultEngine, DefaultSeed, Engine, ExplicitSeed, SeedSource};
use crate::error::{RandomError, Result};


/// A distribution bound to a seeded engine.
///
/// # Type Parameters
///
/// * `T` - Value produced by each draw
/// * `D` - Catalog distribution producing `T`
/// * `E` - Engine, any seedable `rand` generator
/// * `S` - Seed source invoked once at construction
///
/// Draws take `&mut self`: a generator is one stream with one owner. Share it
/// through the scopes in [`shared`](crate::shared) when passing it around is
/// not practical.
#[derive(Clone, Debug)]
pub struct Generator<T, D, E = DefaultEngine, S = DefaultSeed> {
    seed_source: S,
    engine: E,
    distribution: D,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
    _output: PhantomData<fn() -> T>,
}

impl<T, D, E, S> Generator<T, D, E, S>
where
    D: CatalogDistribution<Output = T>,
    E: Engine,
    S: SeedSource,
{
    /// Creates a generator seeded from the default-constructed seed source.
    pub fn new() -> Self
    where
        S: Default,
    {
        Self::with_seed_source(S::default())
    }

    /// Creates a generator seeded from an injected seed source.
    ///
    /// The source is invoked exactly once, here, and retained afterwards
    /// only for [`seed_source`](Self::seed_source).
    pub fn with_seed_source(mut seed_source: S) -> Self {
        let seed = seed_source.next_seed();
        let engine = E::from_seed_value(seed);
        let distribution = D::default();

        tracing::debug!(
            distribution = D::NAME,
            engine = type_name::<E>(),
            seed,
            "Generator initialised"
        );

        Self {
            seed_source,
            engine,
            distribution,
            seed,
            _output: PhantomData,
        }
    }

    /// Draws one value with the distribution's default parameters.
    #[inline]
    pub fn value(&mut self) -> T {
        self.distribution.sample(&mut self.engine)
    }

    /// Draws one value with a one-shot parameter object built from `args`.
    ///
    /// The parameter object is dropped after the draw; later calls to
    /// [`value`](Self::value) still use the defaults.
    ///
    /// # Errors
    ///
    /// Returns the [`RandomError`] raised while validating `args`. The engine
    /// is not advanced in that case.
    #[inline]
    pub fn value_param<P>(&mut self, args: P) -> Result<T>
    where
        P: TryInto<D::Param, Error = RandomError>,
    {
        let param = args.try_into()?;
        Ok(self.value_with(&param))
    }

    /// Draws one value with an already validated parameter object.
    #[inline]
    pub fn value_with(&mut self, param: &D::Param) -> T {
        self.distribution.sample_with(&mut self.engine, param)
    }

    /// Fills the buffer with draws using the default parameters.
    pub fn fill(&mut self, buffer: &mut [T]) {
        for value in buffer.iter_mut() {
            *value = self.distribution.sample(&mut self.engine);
        }
    }

    /// Returns the distribution instance.
    #[inline]
    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    /// Returns the engine.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns the engine mutably, e.g. to drive a custom capability from
    /// the same stream.
    #[inline]
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Returns the seed source.
    #[inline]
    pub fn seed_source(&self) -> &S {
        &self.seed_source
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<T, D, E, S> Generator<T, D, E, S>
where
    D: RangeDistribution<Output = T>,
    E: Engine,
    S: SeedSource,
{
    /// Draws one value constrained to `[min, max]`, following the family's
    /// bound convention (closed for integers, half-open for reals).
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvertedRange`] when `min > max`
    /// - [`RandomError::NonFiniteBound`] for non-finite real bounds
    ///
    /// The engine is not advanced on error.
    #[inline]
    pub fn range(&mut self, min: D::Bound, max: D::Bound) -> Result<T> {
        self.distribution.sample_range(&mut self.engine, min, max)
    }
}

impl<T, D, E> Generator<T, D, E, ExplicitSeed>
where
    D: CatalogDistribution<Output = T>,
    E: Engine,
{
    /// Creates a generator with a caller-chosen seed.
    ///
    /// The same seed and engine always reproduce the same stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randgen_core::distributions::UniformReal;
    /// use randgen_core::engine::{DefaultEngine, ExplicitSeed};
    /// use randgen_core::Generator;
    ///
    /// type Unit = Generator<f64, UniformReal<f64>, DefaultEngine, ExplicitSeed>;
    ///
    /// let mut first = Unit::from_seed(12345);
    /// let mut second = Unit::from_seed(12345);
    /// assert_eq!(first.value(), second.value());
    /// assert_eq!(first.seed(), 12345);
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_seed_source(ExplicitSeed(seed))
    }
}

impl<T, D, E, S> Default for Generator<T, D, E, S>
where
    D: CatalogDistribution<Output = T>,
    E: Engine,
    S: SeedSource + Default,
{
    fn default() -> Self {
        Self::new()
    }
}
