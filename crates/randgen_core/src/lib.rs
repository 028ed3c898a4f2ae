//! # randgen_core
//!
//! Generic random value generation. A [`Generator`] binds three independent
//! axes into one callable object:
//!
//! - a **distribution** from the [`distributions`] catalog (which shape, and
//!   which element type it may produce),
//! - an **engine**, any seedable `rand` generator,
//! - a **seed source**, invoked exactly once to bring the engine into its
//!   starting state.
//!
//! Domain types join the same calling convention through
//! [`CustomGenerator`] by implementing the capability traits in [`custom`].
//!
//! ## Calling Convention
//!
//! Every generator answers three call shapes:
//!
//! - `value()` draws with the distribution's default parameters
//! - `value_param(args)` draws with a one-shot parameter object
//! - `range(min, max)` draws inside explicit bounds
//!
//! ## Sharing Strategies
//!
//! Generators are plain owned values; pass them where a stream is needed.
//! When call sites must share one stream without threading it through,
//! pick an explicit scope from [`shared`]:
//!
//! - [`Local`]: one instance per instantiation per thread, no locking
//! - [`Global`]: one instance per instantiation per process, locked per draw
//! - [`SyncGenerator`]: one caller-owned instance behind a mutex
//!
//! Every strategy seeds each instance exactly once.
//!
//! ## Usage Example
//!
//! ```rust
//! use randgen_core::presets::{BoolGen, SeededIntGen};
//! use randgen_core::shared::Local;
//!
//! // Owned generators, reproducible stream
//! let mut dice = SeededIntGen::<i32>::from_seed(7);
//! let mut replay = SeededIntGen::<i32>::from_seed(7);
//! let roll = dice.range(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//! assert_eq!(replay.range(1, 6).unwrap(), roll);
//!
//! // Thread-local shared instance, lazily seeded on first use
//! let heads = Local::<BoolGen>::value_param(1.0).unwrap();
//! assert!(heads);
//! ```

pub mod custom;
pub mod distributions;
pub mod engine;
pub mod error;
pub mod generator;
pub mod presets;
pub mod shared;

pub use custom::{CustomGenerator, RandomRange, RandomValue, RandomValueWith};
pub use distributions::{CatalogDistribution, IntegerType, RangeDistribution, RealType};
pub use engine::{Engine, EntropySeed, ExplicitSeed, FixedSeed, SeedSource};
pub use error::{RandomError, Result};
pub use generator::Generator;
pub use shared::{Global, Local, SyncGenerator};
