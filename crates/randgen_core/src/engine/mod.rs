//! # Engines and Seed Sources
//!
//! An engine is any deterministic, seedable `rand` generator. A seed source
//! yields the single `u64` used to initialise an engine. Keeping the two
//! apart lets a caller swap one axis (e.g. a fixed seed for a reproducible
//! run) without redeclaring the other.
//!
//! ## Seeding Handshake
//!
//! A [`Generator`](crate::Generator) invokes its seed source exactly once,
//! at construction, and hands the value to [`SeedableRng::seed_from_u64`].
//! Engines are never reseeded afterwards; repeated draws form one coherent
//! stream.
//!
//! ## Module Structure
//!
//! - [`seed`]: the [`SeedSource`] contract and the bundled sources
//!
//! ## Usage Example
//!
//! ```rust
//! use randgen_core::engine::{DefaultEngine, FixedSeed, SeedSource};
//! use rand::{Rng, SeedableRng};
//!
//! let mut source = FixedSeed::<42>;
//! let mut engine = DefaultEngine::seed_from_u64(source.next_seed());
//! let _: u32 = engine.gen();
//! ```

mod seed;

use rand::{RngCore, SeedableRng};

pub use seed::{EntropySeed, ExplicitSeed, FixedSeed, SeedSource};

/// Engine used by the presets when none is named.
///
/// `StdRng` is a cryptographically strong generator whose algorithm may change
/// between `rand` releases; pick a named engine such as
/// `rand::rngs::SmallRng` when the stream itself must stay stable.
pub type DefaultEngine = rand::rngs::StdRng;

/// Seed source used by the presets when none is named.
pub type DefaultSeed = EntropySeed;

/// A deterministic, seedable source of pseudo-random bits.
///
/// Blanket-implemented for every `rand` generator that can be seeded from a
/// `u64`, so any of `StdRng`, `SmallRng` or the ChaCha family plug in.
pub trait Engine: RngCore + SeedableRng {
    /// Initialises the engine from a single seed value.
    #[inline]
    fn from_seed_value(seed: u64) -> Self {
        Self::seed_from_u64(seed)
    }
}

impl<E: RngCore + SeedableRng> Engine for E {}
