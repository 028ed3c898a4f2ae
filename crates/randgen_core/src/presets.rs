//! Preset generator aliases.
//!
//! The presets name the common instantiations and wire [`DefaultEngine`] and
//! [`DefaultSeed`] unless told otherwise. Aliases only apply their defaults
//! in type position, so annotate the binding:
//!
//! ```rust
//! use randgen_core::presets::{FloatGen, IntGen, SeededIntGen};
//!
//! let mut ids: IntGen<u64> = IntGen::new();
//! let mut prices: FloatGen = FloatGen::new();
//! let mut replay: SeededIntGen = SeededIntGen::from_seed(42);
//!
//! let _ = (ids.value(), prices.range(100.0, 1000.0).unwrap(), replay.value());
//! ```

use crate::distributions::{Bernoulli, UniformInt, UniformReal};
use crate::engine::ExplicitSeed;
use crate::generator::Generator;

pub use crate::engine::{DefaultEngine, DefaultSeed};

/// Integer generator, uniform over `[0, T::MAX]` unless parameterised.
pub type IntGen<T = i32, D = UniformInt<T>, E = DefaultEngine, S = DefaultSeed> =
    Generator<T, D, E, S>;

/// Floating-point generator, uniform over `[0, 1)` unless parameterised.
pub type FloatGen<F = f32, D = UniformReal<F>, E = DefaultEngine, S = DefaultSeed> =
    Generator<F, D, E, S>;

/// Boolean generator, fair unless parameterised.
pub type BoolGen<E = DefaultEngine, S = DefaultSeed> = Generator<bool, Bernoulli, E, S>;

/// [`IntGen`] with a caller-chosen seed.
pub type SeededIntGen<T = i32, D = UniformInt<T>, E = DefaultEngine> =
    Generator<T, D, E, ExplicitSeed>;

/// [`FloatGen`] with a caller-chosen seed.
pub type SeededFloatGen<F = f32, D = UniformReal<F>, E = DefaultEngine> =
    Generator<F, D, E, ExplicitSeed>;

/// [`BoolGen`] with a caller-chosen seed.
pub type SeededBoolGen<E = DefaultEngine> = Generator<bool, Bernoulli, E, ExplicitSeed>;
