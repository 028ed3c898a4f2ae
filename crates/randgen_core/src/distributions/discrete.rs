//! Boolean and counting families.
//!
//! Negative-binomial and geometric draws are composed from `rand_distr`
//! primitives: the former as a gamma-mixed Poisson, the latter as the integer
//! part of an exponential variate.

use std::marker::PhantomData;

use num_traits::ToPrimitive;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use super::{saturating_count, CatalogDistribution, IntegerType};
use crate::error::{RandomError, Result};

/// Largest Poisson mean accepted, and the mixing rate above which a negative
/// binomial count saturates.
///
/// The rejection sampler loses precision in `lambda ln(lambda) - ln Gamma(1 + lambda)`
/// beyond this point and may stop accepting draws.
pub const MAX_POISSON_MEAN: f64 = 1e10;

fn check_probability(distribution: &'static str, p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(RandomError::invalid(
            distribution,
            format!("probability {} is outside [0, 1]", p),
        ));
    }
    Ok(())
}

fn check_success_probability(distribution: &'static str, p: f64) -> Result<()> {
    if !(p > 0.0 && p <= 1.0) {
        return Err(RandomError::invalid(
            distribution,
            format!("probability {} is outside (0, 1]", p),
        ));
    }
    Ok(())
}

// ============================================================================
// Bernoulli
// ============================================================================

/// Success probability of a [`Bernoulli`] draw.
#[derive(Clone, Debug)]
pub struct BernoulliParam {
    p: f64,
    inner: rand::distributions::Bernoulli,
}

impl BernoulliParam {
    /// Creates a parameter with success probability `p`.
    ///
    /// `p = 0.0` never yields `true`; `p = 1.0` always does.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] when `p` is outside `[0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        let inner = rand::distributions::Bernoulli::new(p)
            .map_err(|e| RandomError::invalid(Bernoulli::NAME, e))?;
        Ok(Self { p, inner })
    }

    /// Success probability.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl TryFrom<f64> for BernoulliParam {
    type Error = RandomError;

    fn try_from(p: f64) -> Result<Self> {
        Self::new(p)
    }
}

/// Boolean outcomes with a fixed success probability.
#[derive(Clone, Debug)]
pub struct Bernoulli {
    param: BernoulliParam,
}

impl Default for Bernoulli {
    fn default() -> Self {
        Self {
            param: BernoulliParam::new(0.5).expect("p = 0.5 is a valid Bernoulli parameter"),
        }
    }
}

impl CatalogDistribution for Bernoulli {
    type Output = bool;
    type Param = BernoulliParam;
    const NAME: &'static str = "bernoulli";

    #[inline]
    fn param(&self) -> &Self::Param {
        &self.param
    }

    #[inline]
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> bool {
        param.inner.sample(rng)
    }
}

// ============================================================================
// Binomial
// ============================================================================

/// Trial count and success probability of a [`Binomial`] draw.
#[derive(Clone, Debug)]
pub struct BinomialParam<T> {
    trials: T,
    p: f64,
    inner: rand_distr::Binomial,
}

impl<T: IntegerType> BinomialParam<T> {
    /// Creates a parameter for `trials` independent trials with success
    /// probability `p`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] for a negative trial count or
    /// a probability outside `[0, 1]`.
    pub fn new(trials: T, p: f64) -> Result<Self> {
        let n = trials.to_u64().ok_or_else(|| {
            RandomError::invalid(
                Binomial::<T>::NAME,
                format!("trial count {:?} is not a non-negative 64-bit count", trials),
            )
        })?;
        check_probability(Binomial::<T>::NAME, p)?;
        let inner = rand_distr::Binomial::new(n, p)
            .map_err(|e| RandomError::invalid(Binomial::<T>::NAME, e))?;
        Ok(Self { trials, p, inner })
    }

    /// Number of trials.
    #[inline]
    pub fn trials(&self) -> T {
        self.trials
    }

    /// Success probability of each trial.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl<T: IntegerType> TryFrom<(T, f64)> for BinomialParam<T> {
    type Error = RandomError;

    fn try_from((trials, p): (T, f64)) -> Result<Self> {
        Self::new(trials, p)
    }
}

/// Number of successes in a fixed number of trials.
#[derive(Clone, Debug)]
pub struct Binomial<T> {
    param: BinomialParam<T>,
}

impl<T: IntegerType> Default for Binomial<T> {
    fn default() -> Self {
        Self {
            param: BinomialParam::new(T::one(), 0.5)
                .expect("one trial at p = 0.5 is a valid binomial parameter"),
        }
    }
}

impl<T: IntegerType> CatalogDistribution for Binomial<T> {
    type Output = T;
    type Param = BinomialParam<T>;
    const NAME: &'static str = "binomial";

    #[inline]
    fn param(&self) -> &Self::Param {
        &self.param
    }

    #[inline]
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> T {
        // Successes never exceed the trial count, which already fits in T
        let successes: u64 = param.inner.sample(rng);
        saturating_count(successes)
    }
}

// ============================================================================
// Negative binomial
// ============================================================================

/// Success count and probability of a [`NegBinomial`] draw.
#[derive(Clone, Debug)]
pub struct NegBinomialParam<T> {
    successes: T,
    p: f64,
    /// Gamma mixing distribution; `None` when `p = 1` (no failures possible).
    mixing: Option<rand_distr::Gamma<f64>>,
}

impl<T: IntegerType> NegBinomialParam<T> {
    /// Creates a parameter counting failures before `successes` successes,
    /// each trial succeeding with probability `p`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] unless `successes > 0` and
    /// `0 < p <= 1` and `(1 - p) / p` is finite.
    pub fn new(successes: T, p: f64) -> Result<Self> {
        let k = successes
            .to_f64()
            .filter(|&k| k > 0.0)
            .ok_or_else(|| {
                RandomError::invalid(
                    NegBinomial::<T>::NAME,
                    format!("success count {:?} must be positive", successes),
                )
            })?;
        check_success_probability(NegBinomial::<T>::NAME, p)?;

        let mixing = if p < 1.0 {
            let scale = (1.0 - p) / p;
            if !scale.is_finite() {
                return Err(RandomError::invalid(
                    NegBinomial::<T>::NAME,
                    format!("probability {} is too small to mix", p),
                ));
            }
            let gamma = rand_distr::Gamma::new(k, scale)
                .map_err(|e| RandomError::invalid(NegBinomial::<T>::NAME, e))?;
            Some(gamma)
        } else {
            None
        };
        Ok(Self {
            successes,
            p,
            mixing,
        })
    }

    /// Required number of successes.
    #[inline]
    pub fn successes(&self) -> T {
        self.successes
    }

    /// Success probability of each trial.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl<T: IntegerType> TryFrom<(T, f64)> for NegBinomialParam<T> {
    type Error = RandomError;

    fn try_from((successes, p): (T, f64)) -> Result<Self> {
        Self::new(successes, p)
    }
}

/// Number of failures before a fixed number of successes.
///
/// Counts beyond `T::MAX` saturate.
#[derive(Clone, Debug)]
pub struct NegBinomial<T> {
    param: NegBinomialParam<T>,
}

impl<T: IntegerType> Default for NegBinomial<T> {
    fn default() -> Self {
        Self {
            param: NegBinomialParam::new(T::one(), 0.5)
                .expect("one success at p = 0.5 is a valid negative binomial parameter"),
        }
    }
}

impl<T: IntegerType> CatalogDistribution for NegBinomial<T> {
    type Output = T;
    type Param = NegBinomialParam<T>;
    const NAME: &'static str = "negative-binomial";

    #[inline]
    fn param(&self) -> &Self::Param {
        &self.param
    }

    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> T {
        let Some(mixing) = &param.mixing else {
            return T::zero();
        };
        let lambda = mixing.sample(rng);
        if !(lambda <= MAX_POISSON_MEAN) {
            return T::max_value();
        }
        // A zero mixing rate means no failures
        rand_distr::Poisson::new(lambda)
            .map_or_else(|_| T::zero(), |poisson| saturating_count(poisson.sample(rng)))
    }
}

// ============================================================================
// Geometric
// ============================================================================

/// Success probability of a [`Geometric`] draw.
#[derive(Clone, Debug)]
pub struct GeometricParam {
    p: f64,
    /// Exponential with rate `-ln(1 - p)`; `None` when `p = 1`.
    waiting: Option<rand_distr::Exp<f64>>,
}

impl GeometricParam {
    /// Creates a parameter with per-trial success probability `p`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] unless `0 < p <= 1`.
    pub fn new(p: f64) -> Result<Self> {
        check_success_probability("geometric", p)?;
        let waiting = if p < 1.0 {
            let rate = -(-p).ln_1p();
            let exp = rand_distr::Exp::new(rate).map_err(|e| RandomError::invalid("geometric", e))?;
            Some(exp)
        } else {
            None
        };
        Ok(Self { p, waiting })
    }

    /// Success probability of each trial.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl TryFrom<f64> for GeometricParam {
    type Error = RandomError;

    fn try_from(p: f64) -> Result<Self> {
        Self::new(p)
    }
}

/// Number of failures before the first success.
///
/// Counts beyond `T::MAX` saturate.
#[derive(Clone, Debug)]
pub struct Geometric<T> {
    param: GeometricParam,
    _marker: PhantomData<fn() -> T>,
}

impl<T: IntegerType> Default for Geometric<T> {
    fn default() -> Self {
        Self {
            param: GeometricParam::new(0.5).expect("p = 0.5 is a valid geometric parameter"),
            _marker: PhantomData,
        }
    }
}

impl<T: IntegerType> CatalogDistribution for Geometric<T> {
    type Output = T;
    type Param = GeometricParam;
    const NAME: &'static str = "geometric";

    #[inline]
    fn param(&self) -> &Self::Param {
        &self.param
    }

    #[inline]
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> T {
        match &param.waiting {
            Some(exp) => saturating_count(exp.sample(rng).floor()),
            None => T::zero(),
        }
    }
}

// ============================================================================
// Poisson
// ============================================================================

/// Mean of a [`Poisson`] draw.
#[derive(Clone, Debug)]
pub struct PoissonParam {
    mean: f64,
    inner: rand_distr::Poisson<f64>,
}

impl PoissonParam {
    /// Creates a parameter with the given mean.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] unless `mean` is positive
    /// and at most [`MAX_POISSON_MEAN`].
    pub fn new(mean: f64) -> Result<Self> {
        if !(mean <= MAX_POISSON_MEAN) {
            return Err(RandomError::invalid(
                "poisson",
                format!("mean {} is not finite or exceeds {}", mean, MAX_POISSON_MEAN),
            ));
        }
        let inner =
            rand_distr::Poisson::new(mean).map_err(|e| RandomError::invalid("poisson", e))?;
        Ok(Self { mean, inner })
    }

    /// Expected value.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl TryFrom<f64> for PoissonParam {
    type Error = RandomError;

    fn try_from(mean: f64) -> Result<Self> {
        Self::new(mean)
    }
}

/// Event counts over a fixed interval.
///
/// Counts beyond `T::MAX` saturate.
#[derive(Clone, Debug)]
pub struct Poisson<T> {
    param: PoissonParam,
    _marker: PhantomData<fn() -> T>,
}

impl<T: IntegerType> Default for Poisson<T> {
    fn default() -> Self {
        Self {
            param: PoissonParam::new(1.0).expect("mean = 1 is a valid Poisson parameter"),
            _marker: PhantomData,
        }
    }
}

impl<T: IntegerType> CatalogDistribution for Poisson<T> {
    type Output = T;
    type Param = PoissonParam;
    const NAME: &'static str = "poisson";

    #[inline]
    fn param(&self) -> &Self::Param {
        &self.param
    }

    #[inline]
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> T {
        saturating_count(param.inner.sample(rng))
    }
}

// ============================================================================
// Discrete
// ============================================================================

/// Relative weights of a [`Discrete`] draw.
#[derive(Clone, Debug)]
pub struct DiscreteParam {
    weights: Vec<f64>,
    inner: WeightedIndex<f64>,
}

impl DiscreteParam {
    /// Creates a parameter where index `i` is drawn with probability
    /// `weights[i] / sum(weights)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] for an empty list, a negative
    /// or non-finite weight, or weights summing to zero.
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        let inner = WeightedIndex::new(&weights).map_err(|e| RandomError::invalid("discrete", e))?;
        Ok(Self { weights, inner })
    }

    /// Weights as supplied.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl TryFrom<Vec<f64>> for DiscreteParam {
    type Error = RandomError;

    fn try_from(weights: Vec<f64>) -> Result<Self> {
        Self::new(weights)
    }
}

impl TryFrom<&[f64]> for DiscreteParam {
    type Error = RandomError;

    fn try_from(weights: &[f64]) -> Result<Self> {
        Self::new(weights.to_vec())
    }
}

impl<const N: usize> TryFrom<[f64; N]> for DiscreteParam {
    type Error = RandomError;

    fn try_from(weights: [f64; N]) -> Result<Self> {
        Self::new(weights.to_vec())
    }
}

/// Indices drawn proportionally to a weight list.
#[derive(Clone, Debug)]
pub struct Discrete<T> {
    param: DiscreteParam,
    _marker: PhantomData<fn() -> T>,
}

impl<T: IntegerType> Default for Discrete<T> {
    fn default() -> Self {
        Self {
            param: DiscreteParam::new(vec![1.0]).expect("a single unit weight is valid"),
            _marker: PhantomData,
        }
    }
}

impl<T: IntegerType> CatalogDistribution for Discrete<T> {
    type Output = T;
    type Param = DiscreteParam;
    const NAME: &'static str = "discrete";

    #[inline]
    fn param(&self) -> &Self::Param {
        &self.param
    }

    #[inline]
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> T {
        saturating_count(param.inner.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TRIALS: usize = 10_000;

    #[test]
    fn test_bernoulli_boundaries() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = Bernoulli::default();
        let never = BernoulliParam::new(0.0).unwrap();
        let always = BernoulliParam::new(1.0).unwrap();

        for _ in 0..TRIALS {
            assert!(!dist.sample_with(&mut rng, &never));
            assert!(dist.sample_with(&mut rng, &always));
        }
    }

    #[test]
    fn test_bernoulli_rejects_out_of_range() {
        assert!(BernoulliParam::new(1.5).is_err());
        assert!(BernoulliParam::new(-0.1).is_err());
    }

    #[test]
    fn test_binomial_bounded_by_trials() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = Binomial::<u8>::default();
        let param = BinomialParam::new(10_u8, 0.3).unwrap();

        for _ in 0..TRIALS {
            assert!(dist.sample_with(&mut rng, &param) <= 10);
        }
        assert!(dist.sample(&mut rng) <= 1);
    }

    #[test]
    fn test_binomial_rejects_negative_trials() {
        assert!(BinomialParam::new(-3_i32, 0.5).is_err());
    }

    #[test]
    fn test_binomial_mean() {
        let mut rng = StdRng::seed_from_u64(7);
        let dist = Binomial::<i32>::default();
        let param = BinomialParam::new(20, 0.25).unwrap();

        let total: i64 = (0..TRIALS)
            .map(|_| i64::from(dist.sample_with(&mut rng, &param)))
            .sum();
        let mean = total as f64 / TRIALS as f64;
        assert!((mean - 5.0).abs() < 0.2, "binomial mean {} too far from 5", mean);
    }

    #[test]
    fn test_negative_binomial_mean() {
        // Mean failures: k (1 - p) / p = 3 * 0.6 / 0.4 = 4.5
        let mut rng = StdRng::seed_from_u64(11);
        let dist = NegBinomial::<u32>::default();
        let param = NegBinomialParam::new(3_u32, 0.4).unwrap();

        let total: u64 = (0..TRIALS)
            .map(|_| u64::from(dist.sample_with(&mut rng, &param)))
            .sum();
        let mean = total as f64 / TRIALS as f64;
        assert!((mean - 4.5).abs() < 0.25, "negative binomial mean {}", mean);
    }

    #[test]
    fn test_negative_binomial_certain_success() {
        let mut rng = StdRng::seed_from_u64(11);
        let dist = NegBinomial::<u32>::default();
        let param = NegBinomialParam::new(5_u32, 1.0).unwrap();
        assert_eq!(dist.sample_with(&mut rng, &param), 0);
    }

    #[test]
    fn test_negative_binomial_rejects_zero_successes() {
        assert!(NegBinomialParam::new(0_u32, 0.5).is_err());
        assert!(NegBinomialParam::new(2_u32, 0.0).is_err());
    }

    #[test]
    fn test_negative_binomial_rejects_unmixable_probability() {
        assert!(matches!(
            NegBinomialParam::new(1_u64, 1e-320),
            Err(RandomError::InvalidParameter { distribution: "negative-binomial", .. })
        ));
    }

    #[test]
    fn test_negative_binomial_saturates_huge_mixing_rate() {
        // Finite scale of ~1e300: every gamma draw lies far above the ceiling
        let mut rng = StdRng::seed_from_u64(13);
        let dist = NegBinomial::<u64>::default();
        let param = NegBinomialParam::new(1_u64, 1e-300).unwrap();
        for _ in 0..100 {
            assert_eq!(dist.sample_with(&mut rng, &param), u64::MAX);
        }
    }

    #[test]
    fn test_geometric_mean() {
        // Mean failures: (1 - p) / p = 0.8 / 0.2 = 4
        let mut rng = StdRng::seed_from_u64(3);
        let dist = Geometric::<u64>::default();
        let param = GeometricParam::new(0.2).unwrap();

        let total: u64 = (0..TRIALS).map(|_| dist.sample_with(&mut rng, &param)).sum();
        let mean = total as f64 / TRIALS as f64;
        assert!((mean - 4.0).abs() < 0.25, "geometric mean {}", mean);
    }

    #[test]
    fn test_geometric_certain_success() {
        let mut rng = StdRng::seed_from_u64(3);
        let dist = Geometric::<i16>::default();
        let param = GeometricParam::new(1.0).unwrap();
        for _ in 0..100 {
            assert_eq!(dist.sample_with(&mut rng, &param), 0);
        }
    }

    #[test]
    fn test_poisson_mean() {
        let mut rng = StdRng::seed_from_u64(5);
        let dist = Poisson::<u32>::default();
        let param = PoissonParam::new(6.0).unwrap();

        let total: u64 = (0..TRIALS)
            .map(|_| u64::from(dist.sample_with(&mut rng, &param)))
            .sum();
        let mean = total as f64 / TRIALS as f64;
        assert!((mean - 6.0).abs() < 0.2, "poisson mean {}", mean);
    }

    #[test]
    fn test_poisson_rejects_unbounded_mean() {
        for mean in [f64::INFINITY, 1e308, MAX_POISSON_MEAN * 2.0, f64::NAN] {
            assert!(
                matches!(
                    PoissonParam::new(mean),
                    Err(RandomError::InvalidParameter { distribution: "poisson", .. })
                ),
                "mean {} accepted",
                mean
            );
        }
        assert!(PoissonParam::new(MAX_POISSON_MEAN).is_ok());
    }

    #[test]
    fn test_poisson_saturates_narrow_type() {
        let mut rng = StdRng::seed_from_u64(5);
        let dist = Poisson::<u8>::default();
        let param = PoissonParam::new(10_000.0).unwrap();
        assert_eq!(dist.sample_with(&mut rng, &param), u8::MAX);
    }

    #[test]
    fn test_discrete_default_is_index_zero() {
        let mut rng = StdRng::seed_from_u64(9);
        let dist = Discrete::<usize>::default();
        for _ in 0..100 {
            assert_eq!(dist.sample(&mut rng), 0);
        }
    }

    #[test]
    fn test_discrete_respects_zero_weights() {
        let mut rng = StdRng::seed_from_u64(9);
        let dist = Discrete::<u8>::default();
        let param = DiscreteParam::try_from([0.0, 3.0, 0.0, 1.0]).unwrap();

        for _ in 0..TRIALS {
            let index = dist.sample_with(&mut rng, &param);
            assert!(index == 1 || index == 3, "index {} has zero weight", index);
        }
    }

    #[test]
    fn test_discrete_rejects_bad_weights() {
        assert!(DiscreteParam::new(vec![]).is_err());
        assert!(DiscreteParam::new(vec![0.0, 0.0]).is_err());
        assert!(DiscreteParam::new(vec![1.0, -1.0]).is_err());
    }
}
