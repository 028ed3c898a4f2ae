//! # Custom Generators
//!
//! Domain types join the generator calling convention by implementing up to
//! three capability traits:
//!
//! - [`RandomValue`]: a fresh random instance (required for `value`)
//! - [`RandomValueWith<P>`]: a random instance shaped by arguments `P`; a
//!   type may implement it for several `P`
//! - [`RandomRange<B>`]: a random instance between two bounds
//!
//! [`CustomGenerator`] forwards `value`, `value_param` and `range` to those
//! traits unchanged. A call whose capability is missing fails to compile.
//!
//! Every capability has an engine-injected form (`*_from`) taking any
//! [`Rng`]; the plain form drives the same code with `rand::thread_rng()`.
//!
//! ## Usage Example
//!
//! ```rust
//! use randgen_core::custom::{CustomGenerator, RandomValue};
//! use rand::Rng;
//!
//! struct Die;
//!
//! impl RandomValue for Die {
//!     type Output = u8;
//!
//!     fn random_value_from<R: Rng + ?Sized>(rng: &mut R) -> u8 {
//!         rng.gen_range(1..=6)
//!     }
//! }
//!
//! let roll = CustomGenerator::<Die, u8>::value();
//! assert!((1..=6).contains(&roll));
//! ```

use std::marker::PhantomData;

use rand::Rng;

/// Produces a random instance with no arguments.
pub trait RandomValue {
    /// Value produced by one draw.
    type Output;

    /// Produces a random value from an injected engine.
    fn random_value_from<R: Rng + ?Sized>(rng: &mut R) -> Self::Output;

    /// Produces a random value from the thread-local `rand` engine.
    #[inline]
    fn random_value() -> Self::Output {
        Self::random_value_from(&mut rand::thread_rng())
    }
}

/// Produces a random instance shaped by arguments of type `P`.
///
/// Tuples carry several arguments; implementing the trait for more than one
/// `P` gives a type several argument shapes.
pub trait RandomValueWith<P> {
    /// Value produced by one draw.
    type Output;

    /// Produces a random value from an injected engine.
    fn random_value_with_from<R: Rng + ?Sized>(rng: &mut R, args: P) -> Self::Output;

    /// Produces a random value from the thread-local `rand` engine.
    #[inline]
    fn random_value_with(args: P) -> Self::Output {
        Self::random_value_with_from(&mut rand::thread_rng(), args)
    }
}

/// Produces a random instance between `min` and `max`.
///
/// The bound type defaults to the implementing type itself; the meaning of
/// "between" is up to the implementor.
pub trait RandomRange<B = Self> {
    /// Value produced by one draw.
    type Output;

    /// Produces a random value from an injected engine.
    fn random_range_from<R: Rng + ?Sized>(rng: &mut R, min: B, max: B) -> Self::Output;

    /// Produces a random value from the thread-local `rand` engine.
    #[inline]
    fn random_range(min: B, max: B) -> Self::Output {
        Self::random_range_from(&mut rand::thread_rng(), min, max)
    }
}

/// Forwarding adapter from the generator calling convention to a domain
/// type's capability traits.
///
/// # Type Parameters
///
/// * `T` - Domain type implementing the capabilities
/// * `R` - Result type of the forwarded calls, `T` unless stated
///
/// The adapter holds no state and is never instantiated; every entry point
/// is an associated function.
pub struct CustomGenerator<T, R = T>(PhantomData<fn() -> (T, R)>);

impl<T, R> CustomGenerator<T, R> {
    /// Forwards to [`RandomValue::random_value`].
    #[inline]
    pub fn value() -> R
    where
        T: RandomValue<Output = R>,
    {
        T::random_value()
    }

    /// Forwards to [`RandomValue::random_value_from`].
    #[inline]
    pub fn value_from<G: Rng + ?Sized>(rng: &mut G) -> R
    where
        T: RandomValue<Output = R>,
    {
        T::random_value_from(rng)
    }

    /// Forwards to [`RandomValueWith::random_value_with`].
    #[inline]
    pub fn value_param<P>(args: P) -> R
    where
        T: RandomValueWith<P, Output = R>,
    {
        T::random_value_with(args)
    }

    /// Forwards to [`RandomValueWith::random_value_with_from`].
    #[inline]
    pub fn value_param_from<G: Rng + ?Sized, P>(rng: &mut G, args: P) -> R
    where
        T: RandomValueWith<P, Output = R>,
    {
        T::random_value_with_from(rng, args)
    }

    /// Forwards to [`RandomRange::random_range`].
    #[inline]
    pub fn range<B>(min: B, max: B) -> R
    where
        T: RandomRange<B, Output = R>,
    {
        T::random_range(min, max)
    }

    /// Forwards to [`RandomRange::random_range_from`].
    #[inline]
    pub fn range_from<G: Rng + ?Sized, B>(rng: &mut G, min: B, max: B) -> R
    where
        T: RandomRange<B, Output = R>,
    {
        T::random_range_from(rng, min, max)
    }
}
