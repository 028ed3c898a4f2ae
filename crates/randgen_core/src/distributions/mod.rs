//! # Distribution Catalog
//!
//! Named distribution families, each restricted to the element types it can
//! produce. The restriction is a trait bound, so a uniform-integer generator
//! over `f64` fails to compile rather than misbehaving at runtime.
//!
//! | Entry | Element | Default |
//! |---|---|---|
//! | [`UniformInt`] | [`IntegerType`] | `[0, T::MAX]` |
//! | [`UniformReal`] | [`RealType`] | `[0, 1)` |
//! | [`Bernoulli`] | `bool` | `p = 0.5` |
//! | [`Binomial`] | [`IntegerType`] | `t = 1, p = 0.5` |
//! | [`NegBinomial`] | [`IntegerType`] | `k = 1, p = 0.5` |
//! | [`Geometric`] | [`IntegerType`] | `p = 0.5` |
//! | [`Poisson`] | [`IntegerType`] | `mean = 1` |
//! | [`Exponential`] | [`RealType`] | `lambda = 1` |
//! | [`Gamma`] | [`RealType`] | `alpha = 1, beta = 1` |
//! | [`Weibull`] | [`RealType`] | `a = 1, b = 1` |
//! | [`ExtremeValue`] | [`RealType`] | `a = 0, b = 1` |
//! | [`Gaussian`] | [`RealType`] | `mean = 0, stddev = 1` |
//! | [`LogNormal`] | [`RealType`] | `m = 0, s = 1` |
//! | [`ChiSquared`] | [`RealType`] | `n = 1` |
//! | [`Cauchy`] | [`RealType`] | `a = 0, b = 1` |
//! | [`FisherF`] | [`RealType`] | `m = 1, n = 1` |
//! | [`StudentT`] | [`RealType`] | `n = 1` |
//! | [`Discrete`] | [`IntegerType`] | weights `[1]` |
//! | [`PiecewiseConstant`] | [`RealType`] | `[0, 1]`, weight `1` |
//! | [`PiecewiseLinear`] | [`RealType`] | `[0, 1]`, densities `1, 1` |
//!
//! Each entry holds its default parameter object. Per-call parameter objects
//! are validated once when built (`TryFrom` the argument shape) and are
//! never written back into the entry.
//!
//! The sampling itself is delegated to `rand` and `rand_distr`; this module
//! only composes those primitives.

mod continuous;
mod discrete;
mod piecewise;
mod uniform;

use std::fmt::Debug;

use num_traits::{Float, FloatConst, NumCast, PrimInt, ToPrimitive};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::error::Result;

pub use continuous::{
    Cauchy, CauchyParam, ChiSquared, ChiSquaredParam, Exponential, ExponentialParam,
    ExtremeValue, ExtremeValueParam, FisherF, FisherFParam, Gamma, GammaParam, Gaussian,
    GaussianParam, LogNormal, LogNormalParam, StudentT, StudentTParam, Weibull, WeibullParam,
};
pub use discrete::{
    Bernoulli, BernoulliParam, Binomial, BinomialParam, Discrete, DiscreteParam, Geometric,
    GeometricParam, NegBinomial, NegBinomialParam, Poisson, PoissonParam, MAX_POISSON_MEAN,
};
pub use piecewise::{
    PiecewiseConstant, PiecewiseConstantParam, PiecewiseLinear, PiecewiseLinearParam,
};
pub use uniform::{UniformInt, UniformIntParam, UniformReal, UniformRealParam};

/// Element types accepted by the integral catalog entries.
pub trait IntegerType: PrimInt + SampleUniform + Debug + Send + Sync + 'static {}

/// Element types accepted by the floating-point catalog entries.
pub trait RealType: Float + FloatConst + SampleUniform + Debug + Send + Sync + 'static {}

macro_rules! impl_element_type {
    ($marker:ident: $($t:ty),* $(,)?) => {
        $(impl $marker for $t {})*
    };
}

impl_element_type!(IntegerType: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_element_type!(RealType: f32, f64);

/// A named distribution family together with its default parameters.
///
/// Implementors are default-constructed once per generator instance and are
/// not mutated by draws; per-call parameters arrive as a separate
/// [`Param`](CatalogDistribution::Param) object.
pub trait CatalogDistribution: Default {
    /// Value produced by one draw.
    type Output;

    /// Validated parameter object.
    type Param: Clone + Debug;

    /// Catalog name, used in logs and error messages.
    const NAME: &'static str;

    /// Returns the parameters used by [`sample`](CatalogDistribution::sample).
    fn param(&self) -> &Self::Param;

    /// Draws one value using an explicit parameter object.
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> Self::Output;

    /// Draws one value using the default parameters.
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output {
        self.sample_with(rng, self.param())
    }
}

/// A catalog entry that can be constrained to explicit bounds.
pub trait RangeDistribution: CatalogDistribution {
    /// Type of the `min` and `max` bounds.
    type Bound;

    /// Draws one value inside `[min, max]` following the family's bound
    /// convention.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvertedRange`](crate::RandomError::InvertedRange)
    /// when `min > max`, and
    /// [`RandomError::NonFiniteBound`](crate::RandomError::NonFiniteBound)
    /// for non-finite real bounds. No draw is performed on error.
    fn sample_range<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        min: Self::Bound,
        max: Self::Bound,
    ) -> Result<Self::Output>;
}

/// Converts a sampled count into `T`, saturating at `T::MAX`.
#[inline]
pub(crate) fn saturating_count<T: IntegerType, V: ToPrimitive>(value: V) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::max_value)
}
