//! Uniform families: integers over a closed interval, reals over a
//! half-open interval.

use rand::Rng;

use super::{CatalogDistribution, IntegerType, RangeDistribution, RealType};
use crate::error::{RandomError, Result};

/// Bounds of a [`UniformInt`] draw, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformIntParam<T> {
    min: T,
    max: T,
}

impl<T: IntegerType> UniformIntParam<T> {
    /// Creates closed bounds `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvertedRange`] when `min > max`.
    pub fn new(min: T, max: T) -> Result<Self> {
        if min > max {
            return Err(RandomError::inverted(min, max));
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound (inclusive).
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }
}

impl<T: IntegerType> TryFrom<(T, T)> for UniformIntParam<T> {
    type Error = RandomError;

    fn try_from((min, max): (T, T)) -> Result<Self> {
        Self::new(min, max)
    }
}

/// Integers evenly distributed over `[min, max]`.
///
/// # Examples
///
/// ```rust
/// use randgen_core::distributions::{CatalogDistribution, RangeDistribution, UniformInt};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let dist = UniformInt::<u8>::default();
///
/// let any_byte = dist.sample(&mut rng);
/// let die = dist.sample_range(&mut rng, 1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// # let _ = any_byte;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct UniformInt<T> {
    param: UniformIntParam<T>,
}

impl<T: IntegerType> Default for UniformInt<T> {
    fn default() -> Self {
        Self {
            param: UniformIntParam {
                min: T::zero(),
                max: T::max_value(),
            },
        }
    }
}

impl<T: IntegerType> CatalogDistribution for UniformInt<T> {
    type Output = T;
    type Param = UniformIntParam<T>;
    const NAME: &'static str = "uniform-int";

    #[inline]
    fn param(&self) -> &Self::Param {
        &self.param
    }

    #[inline]
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> T {
        rng.gen_range(param.min..=param.max)
    }
}

impl<T: IntegerType> RangeDistribution for UniformInt<T> {
    type Bound = T;

    fn sample_range<R: Rng + ?Sized>(&self, rng: &mut R, min: T, max: T) -> Result<T> {
        let param = UniformIntParam::new(min, max)?;
        Ok(self.sample_with(rng, &param))
    }
}

/// Bounds of a [`UniformReal`] draw, `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformRealParam<F> {
    min: F,
    max: F,
}

impl<F: RealType> UniformRealParam<F> {
    /// Creates half-open bounds `[min, max)`.
    ///
    /// A degenerate interval `min == max` is accepted and always yields `min`.
    ///
    /// # Errors
    ///
    /// - [`RandomError::NonFiniteBound`] when a bound, or `max - min`, is not finite
    /// - [`RandomError::InvertedRange`] when `min > max`
    pub fn new(min: F, max: F) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
            return Err(RandomError::non_finite(min, max));
        }
        if min > max {
            return Err(RandomError::inverted(min, max));
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn min(&self) -> F {
        self.min
    }

    /// Upper bound (exclusive unless equal to `min`).
    #[inline]
    pub fn max(&self) -> F {
        self.max
    }
}

impl<F: RealType> TryFrom<(F, F)> for UniformRealParam<F> {
    type Error = RandomError;

    fn try_from((min, max): (F, F)) -> Result<Self> {
        Self::new(min, max)
    }
}

/// Reals evenly distributed over `[min, max)`.
#[derive(Clone, Copy, Debug)]
pub struct UniformReal<F> {
    param: UniformRealParam<F>,
}

impl<F: RealType> Default for UniformReal<F> {
    fn default() -> Self {
        Self {
            param: UniformRealParam {
                min: F::zero(),
                max: F::one(),
            },
        }
    }
}

impl<F: RealType> CatalogDistribution for UniformReal<F> {
    type Output = F;
    type Param = UniformRealParam<F>;
    const NAME: &'static str = "uniform-real";

    #[inline]
    fn param(&self) -> &Self::Param {
        &self.param
    }

    #[inline]
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> F {
        if param.min == param.max {
            return param.min;
        }
        rng.gen_range(param.min..param.max)
    }
}

impl<F: RealType> RangeDistribution for UniformReal<F> {
    type Bound = F;

    fn sample_range<R: Rng + ?Sized>(&self, rng: &mut R, min: F, max: F) -> Result<F> {
        let param = UniformRealParam::new(min, max)?;
        Ok(self.sample_with(rng, &param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_int_default_covers_type() {
        let dist = UniformInt::<u8>::default();
        assert_eq!(dist.param().min(), 0);
        assert_eq!(dist.param().max(), u8::MAX);
    }

    #[test]
    fn test_uniform_int_range_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = UniformInt::<i32>::default();
        let mut seen = [false; 3];

        for _ in 0..1_000 {
            let value = dist.sample_range(&mut rng, -1, 1).unwrap();
            assert!((-1..=1).contains(&value));
            seen[(value + 1) as usize] = true;
        }
        assert!(seen.iter().all(|&hit| hit), "both bounds must be reachable");
    }

    #[test]
    fn test_uniform_int_single_point() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = UniformInt::<i64>::default();
        assert_eq!(dist.sample_range(&mut rng, 7, 7).unwrap(), 7);
    }

    #[test]
    fn test_uniform_int_inverted() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = UniformInt::<i32>::default();
        let err = dist.sample_range(&mut rng, 10, 1).unwrap_err();
        assert!(matches!(err, RandomError::InvertedRange { .. }));
    }

    #[test]
    fn test_uniform_real_default_unit_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = UniformReal::<f64>::default();
        for _ in 0..1_000 {
            let value = dist.sample(&mut rng);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_uniform_real_half_open() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = UniformReal::<f32>::default();
        for _ in 0..1_000 {
            let value = dist.sample_range(&mut rng, -500.0, 500.0).unwrap();
            assert!((-500.0..500.0).contains(&value));
        }
    }

    #[test]
    fn test_uniform_real_degenerate() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = UniformReal::<f64>::default();
        assert_eq!(dist.sample_range(&mut rng, 2.5, 2.5).unwrap(), 2.5);
    }

    #[test]
    fn test_uniform_real_rejects_non_finite() {
        assert!(matches!(
            UniformRealParam::new(f64::NAN, 1.0),
            Err(RandomError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            UniformRealParam::new(0.0, f64::INFINITY),
            Err(RandomError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            UniformRealParam::new(-f64::MAX, f64::MAX),
            Err(RandomError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn test_param_from_tuple() {
        let param = UniformIntParam::try_from((3_u32, 9_u32)).unwrap();
        assert_eq!((param.min(), param.max()), (3, 9));
        assert!(UniformRealParam::try_from((1.0_f64, 0.0_f64)).is_err());
    }
}
