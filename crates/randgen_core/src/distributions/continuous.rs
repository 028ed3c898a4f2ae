//! Floating-point families backed directly by `rand_distr`.
//!
//! Each family has a parameter object holding the validated `rand_distr`
//! distribution, and a catalog entry holding the default parameter object.
//! The `rand_distr` bounds on `F` are restated on every type; `f32` and `f64`
//! satisfy all of them.

use rand::distributions::{Distribution, Open01, OpenClosed01, Standard};
use rand::Rng;
use rand_distr::{Exp1, StandardNormal};

use super::{CatalogDistribution, RealType};
use crate::error::{RandomError, Result};

/// Declares the catalog entry for a parameter object that exposes
/// `new(..) -> Result<Self>` and an `inner` `rand_distr` distribution.
macro_rules! real_entry {
    (
        $(#[$doc:meta])*
        $name:ident($label:literal, $param:ident)
        where [$($bounds:tt)+]
        default($($default:expr),+ $(,)?)
    ) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name<F>
        where
            F: RealType,
            $($bounds)+
        {
            param: $param<F>,
        }

        impl<F> Default for $name<F>
        where
            F: RealType,
            $($bounds)+
        {
            fn default() -> Self {
                Self {
                    param: $param::new($($default),+)
                        .expect(concat!("default ", $label, " parameters are valid")),
                }
            }
        }

        impl<F> CatalogDistribution for $name<F>
        where
            F: RealType,
            $($bounds)+
        {
            type Output = F;
            type Param = $param<F>;
            const NAME: &'static str = $label;

            #[inline]
            fn param(&self) -> &Self::Param {
                &self.param
            }

            #[inline]
            fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> F {
                param.inner.sample(rng)
            }
        }
    };
}

/// `TryFrom<F>` for single-parameter families, per concrete float type.
macro_rules! param_from_scalar {
    ($($param:ident),+ $(,)?) => {$(
        impl TryFrom<f32> for $param<f32> {
            type Error = RandomError;

            fn try_from(value: f32) -> Result<Self> {
                Self::new(value)
            }
        }

        impl TryFrom<f64> for $param<f64> {
            type Error = RandomError;

            fn try_from(value: f64) -> Result<Self> {
                Self::new(value)
            }
        }
    )+};
}

/// `TryFrom<(F, F)>` for two-parameter families, per concrete float type.
macro_rules! param_from_pair {
    ($($param:ident),+ $(,)?) => {$(
        impl TryFrom<(f32, f32)> for $param<f32> {
            type Error = RandomError;

            fn try_from((first, second): (f32, f32)) -> Result<Self> {
                Self::new(first, second)
            }
        }

        impl TryFrom<(f64, f64)> for $param<f64> {
            type Error = RandomError;

            fn try_from((first, second): (f64, f64)) -> Result<Self> {
                Self::new(first, second)
            }
        }
    )+};
}

// ============================================================================
// Exponential
// ============================================================================

/// Validated parameters of an [`Exponential`] draw.
#[derive(Clone, Debug)]
pub struct ExponentialParam<F>
where
    F: RealType,
    Exp1: Distribution<F>,
{
    lambda: F,
    inner: rand_distr::Exp<F>,
}

impl<F> ExponentialParam<F>
where
    F: RealType,
    Exp1: Distribution<F>,
{
    /// Creates a parameter with rate `lambda`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] for a negative or NaN rate.
    pub fn new(lambda: F) -> Result<Self> {
        let inner =
            rand_distr::Exp::new(lambda).map_err(|e| RandomError::invalid("exponential", e))?;
        Ok(Self { lambda, inner })
    }

    /// Rate.
    #[inline]
    pub fn lambda(&self) -> F {
        self.lambda
    }
}

real_entry! {
    /// Waiting times between events of a Poisson process.
    Exponential("exponential", ExponentialParam)
    where [Exp1: Distribution<F>]
    default(F::one())
}

// ============================================================================
// Gamma family (gamma, chi-squared, Fisher F, Student t)
// ============================================================================

/// Validated parameters of a [`Gamma`] draw.
#[derive(Clone, Debug)]
pub struct GammaParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
    Exp1: Distribution<F>,
    Open01: Distribution<F>,
{
    alpha: F,
    beta: F,
    inner: rand_distr::Gamma<F>,
}

impl<F> GammaParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
    Exp1: Distribution<F>,
    Open01: Distribution<F>,
{
    /// Creates a parameter with shape `alpha` and scale `beta`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] unless both are positive.
    pub fn new(alpha: F, beta: F) -> Result<Self> {
        let inner =
            rand_distr::Gamma::new(alpha, beta).map_err(|e| RandomError::invalid("gamma", e))?;
        Ok(Self { alpha, beta, inner })
    }

    /// Shape.
    #[inline]
    pub fn alpha(&self) -> F {
        self.alpha
    }

    /// Scale.
    #[inline]
    pub fn beta(&self) -> F {
        self.beta
    }
}

real_entry! {
    /// Gamma-distributed reals (shape `alpha`, scale `beta`).
    Gamma("gamma", GammaParam)
    where [StandardNormal: Distribution<F>, Exp1: Distribution<F>, Open01: Distribution<F>]
    default(F::one(), F::one())
}

/// Validated parameters of a [`ChiSquared`] draw.
#[derive(Clone, Debug)]
pub struct ChiSquaredParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
    Exp1: Distribution<F>,
    Open01: Distribution<F>,
{
    n: F,
    inner: rand_distr::ChiSquared<F>,
}

impl<F> ChiSquaredParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
    Exp1: Distribution<F>,
    Open01: Distribution<F>,
{
    /// Creates a parameter with `n` degrees of freedom.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] unless `n` is positive.
    pub fn new(n: F) -> Result<Self> {
        let inner =
            rand_distr::ChiSquared::new(n).map_err(|e| RandomError::invalid("chi-squared", e))?;
        Ok(Self { n, inner })
    }

    /// Degrees of freedom.
    #[inline]
    pub fn n(&self) -> F {
        self.n
    }
}

real_entry! {
    /// Sum of squares of `n` independent standard normals.
    ChiSquared("chi-squared", ChiSquaredParam)
    where [StandardNormal: Distribution<F>, Exp1: Distribution<F>, Open01: Distribution<F>]
    default(F::one())
}

/// Validated parameters of a [`FisherF`] draw.
#[derive(Clone, Debug)]
pub struct FisherFParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
    Exp1: Distribution<F>,
    Open01: Distribution<F>,
{
    m: F,
    n: F,
    inner: rand_distr::FisherF<F>,
}

impl<F> FisherFParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
    Exp1: Distribution<F>,
    Open01: Distribution<F>,
{
    /// Creates a parameter with `m` numerator and `n` denominator degrees
    /// of freedom.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] unless both are positive.
    pub fn new(m: F, n: F) -> Result<Self> {
        let inner =
            rand_distr::FisherF::new(m, n).map_err(|e| RandomError::invalid("fisher-f", e))?;
        Ok(Self { m, n, inner })
    }

    /// Numerator degrees of freedom.
    #[inline]
    pub fn m(&self) -> F {
        self.m
    }

    /// Denominator degrees of freedom.
    #[inline]
    pub fn n(&self) -> F {
        self.n
    }
}

real_entry! {
    /// Fisher's F-distribution.
    FisherF("fisher-f", FisherFParam)
    where [StandardNormal: Distribution<F>, Exp1: Distribution<F>, Open01: Distribution<F>]
    default(F::one(), F::one())
}

/// Validated parameters of a [`StudentT`] draw.
#[derive(Clone, Debug)]
pub struct StudentTParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
    Exp1: Distribution<F>,
    Open01: Distribution<F>,
{
    n: F,
    inner: rand_distr::StudentT<F>,
}

impl<F> StudentTParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
    Exp1: Distribution<F>,
    Open01: Distribution<F>,
{
    /// Creates a parameter with `n` degrees of freedom.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] unless `n` is positive.
    pub fn new(n: F) -> Result<Self> {
        let inner =
            rand_distr::StudentT::new(n).map_err(|e| RandomError::invalid("student-t", e))?;
        Ok(Self { n, inner })
    }

    /// Degrees of freedom.
    #[inline]
    pub fn n(&self) -> F {
        self.n
    }
}

real_entry! {
    /// Student's t-distribution.
    StudentT("student-t", StudentTParam)
    where [StandardNormal: Distribution<F>, Exp1: Distribution<F>, Open01: Distribution<F>]
    default(F::one())
}

// ============================================================================
// Weibull and extreme value
// ============================================================================

/// Validated parameters of a [`Weibull`] draw.
#[derive(Clone, Debug)]
pub struct WeibullParam<F>
where
    F: RealType,
    OpenClosed01: Distribution<F>,
{
    shape: F,
    scale: F,
    inner: rand_distr::Weibull<F>,
}

impl<F> WeibullParam<F>
where
    F: RealType,
    OpenClosed01: Distribution<F>,
{
    /// Creates a parameter with the given `shape` (`a`) and `scale` (`b`).
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] unless both are positive.
    pub fn new(shape: F, scale: F) -> Result<Self> {
        // rand_distr takes (scale, shape)
        let inner =
            rand_distr::Weibull::new(scale, shape).map_err(|e| RandomError::invalid("weibull", e))?;
        Ok(Self {
            shape,
            scale,
            inner,
        })
    }

    /// Shape (`a`).
    #[inline]
    pub fn shape(&self) -> F {
        self.shape
    }

    /// Scale (`b`).
    #[inline]
    pub fn scale(&self) -> F {
        self.scale
    }
}

real_entry! {
    /// Weibull-distributed reals.
    Weibull("weibull", WeibullParam)
    where [OpenClosed01: Distribution<F>]
    default(F::one(), F::one())
}

/// Validated parameters of an [`ExtremeValue`] draw.
#[derive(Clone, Debug)]
pub struct ExtremeValueParam<F>
where
    F: RealType,
    OpenClosed01: Distribution<F>,
{
    location: F,
    scale: F,
    inner: rand_distr::Gumbel<F>,
}

impl<F> ExtremeValueParam<F>
where
    F: RealType,
    OpenClosed01: Distribution<F>,
{
    /// Creates a parameter with the given `location` (`a`) and `scale` (`b`).
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] for a non-finite location or
    /// a non-positive scale.
    pub fn new(location: F, scale: F) -> Result<Self> {
        let inner = rand_distr::Gumbel::new(location, scale)
            .map_err(|e| RandomError::invalid("extreme-value", e))?;
        Ok(Self {
            location,
            scale,
            inner,
        })
    }

    /// Location (`a`).
    #[inline]
    pub fn location(&self) -> F {
        self.location
    }

    /// Scale (`b`).
    #[inline]
    pub fn scale(&self) -> F {
        self.scale
    }
}

real_entry! {
    /// Type I (Gumbel) extreme value distribution of maxima.
    ExtremeValue("extreme-value", ExtremeValueParam)
    where [OpenClosed01: Distribution<F>]
    default(F::zero(), F::one())
}

// ============================================================================
// Normal family
// ============================================================================

/// Validated parameters of a [`Gaussian`] draw.
#[derive(Clone, Debug)]
pub struct GaussianParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
{
    mean: F,
    std_dev: F,
    inner: rand_distr::Normal<F>,
}

impl<F> GaussianParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
{
    /// Creates a parameter with the given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] for a negative or NaN
    /// standard deviation.
    pub fn new(mean: F, std_dev: F) -> Result<Self> {
        let inner =
            rand_distr::Normal::new(mean, std_dev).map_err(|e| RandomError::invalid("gaussian", e))?;
        Ok(Self {
            mean,
            std_dev,
            inner,
        })
    }

    /// Mean.
    #[inline]
    pub fn mean(&self) -> F {
        self.mean
    }

    /// Standard deviation.
    #[inline]
    pub fn std_dev(&self) -> F {
        self.std_dev
    }
}

real_entry! {
    /// Normal (Gaussian) distribution.
    Gaussian("gaussian", GaussianParam)
    where [StandardNormal: Distribution<F>]
    default(F::zero(), F::one())
}

/// Validated parameters of a [`LogNormal`] draw.
#[derive(Clone, Debug)]
pub struct LogNormalParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
{
    m: F,
    s: F,
    inner: rand_distr::LogNormal<F>,
}

impl<F> LogNormalParam<F>
where
    F: RealType,
    StandardNormal: Distribution<F>,
{
    /// Creates a parameter whose logarithm has mean `m` and standard
    /// deviation `s`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] for a negative or NaN `s`.
    pub fn new(m: F, s: F) -> Result<Self> {
        let inner =
            rand_distr::LogNormal::new(m, s).map_err(|e| RandomError::invalid("log-normal", e))?;
        Ok(Self { m, s, inner })
    }

    /// Mean of the logarithm.
    #[inline]
    pub fn m(&self) -> F {
        self.m
    }

    /// Standard deviation of the logarithm.
    #[inline]
    pub fn s(&self) -> F {
        self.s
    }
}

real_entry! {
    /// Reals whose logarithm is normally distributed.
    LogNormal("log-normal", LogNormalParam)
    where [StandardNormal: Distribution<F>]
    default(F::zero(), F::one())
}

// ============================================================================
// Cauchy
// ============================================================================

/// Validated parameters of a [`Cauchy`] draw.
#[derive(Clone, Debug)]
pub struct CauchyParam<F>
where
    F: RealType,
    Standard: Distribution<F>,
{
    location: F,
    scale: F,
    inner: rand_distr::Cauchy<F>,
}

impl<F> CauchyParam<F>
where
    F: RealType,
    Standard: Distribution<F>,
{
    /// Creates a parameter with the given `location` (`a`) and `scale` (`b`).
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] unless `scale` is positive.
    pub fn new(location: F, scale: F) -> Result<Self> {
        let inner =
            rand_distr::Cauchy::new(location, scale).map_err(|e| RandomError::invalid("cauchy", e))?;
        Ok(Self {
            location,
            scale,
            inner,
        })
    }

    /// Location (`a`), the median.
    #[inline]
    pub fn location(&self) -> F {
        self.location
    }

    /// Scale (`b`).
    #[inline]
    pub fn scale(&self) -> F {
        self.scale
    }
}

real_entry! {
    /// Cauchy (Lorentz) distribution.
    Cauchy("cauchy", CauchyParam)
    where [Standard: Distribution<F>]
    default(F::zero(), F::one())
}

param_from_scalar!(ExponentialParam, ChiSquaredParam, StudentTParam);
param_from_pair!(
    GammaParam,
    FisherFParam,
    WeibullParam,
    ExtremeValueParam,
    GaussianParam,
    LogNormalParam,
    CauchyParam,
);
