//! Seed sources.
//!
//! A seed source is invoked with no arguments and yields one `u64`. It is
//! consumed once per generator instance; its own reseed policy, if any, is
//! opaque to the generator.

use rand::rngs::OsRng;
use rand::RngCore;

/// Provider of the single value that initialises an engine.
///
/// Implemented for the bundled sources and for any `FnMut() -> u64` closure,
/// so ad-hoc sources need no wrapper type.
///
/// # Examples
///
/// ```rust
/// use randgen_core::engine::SeedSource;
///
/// let mut counter = 0u64;
/// let mut source = || {
///     counter += 1;
///     counter
/// };
/// assert_eq!(source.next_seed(), 1);
/// assert_eq!(source.next_seed(), 2);
/// ```
pub trait SeedSource {
    /// Yields a seed value.
    fn next_seed(&mut self) -> u64;
}

impl<F: FnMut() -> u64> SeedSource for F {
    #[inline]
    fn next_seed(&mut self) -> u64 {
        self()
    }
}

/// Operating-system entropy.
///
/// Every invocation reads fresh entropy, so two generators built from this
/// source start from unrelated states.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropySeed;

impl SeedSource for EntropySeed {
    #[inline]
    fn next_seed(&mut self) -> u64 {
        OsRng.next_u64()
    }
}

/// Compile-time constant seed.
///
/// The seed is part of the type, so `FixedSeed<1>` and `FixedSeed<2>` form
/// distinct instantiations in the shared scopes. Useful for reproducible
/// process-wide streams.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedSeed<const SEED: u64>;

impl<const SEED: u64> SeedSource for FixedSeed<SEED> {
    #[inline]
    fn next_seed(&mut self) -> u64 {
        SEED
    }
}

/// Runtime seed chosen by the caller.
///
/// Used by [`Generator::from_seed`](crate::Generator::from_seed). The default
/// value seeds with zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExplicitSeed(pub u64);

impl SeedSource for ExplicitSeed {
    #[inline]
    fn next_seed(&mut self) -> u64 {
        self.0
    }
}
