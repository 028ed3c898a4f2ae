//! Piecewise families over a list of interval boundaries.
//!
//! Both families pick an interval with `rand`'s `WeightedIndex` and then
//! place the value inside it: uniformly for the constant family, following
//! the linear density for the linear family.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use super::{CatalogDistribution, RealType};
use crate::error::{RandomError, Result};

fn check_boundaries<F: RealType>(distribution: &'static str, boundaries: &[F]) -> Result<()> {
    if boundaries.len() < 2 {
        return Err(RandomError::invalid(
            distribution,
            format!("need at least two boundaries, got {}", boundaries.len()),
        ));
    }
    if boundaries.iter().any(|b| !b.is_finite()) {
        return Err(RandomError::invalid(distribution, "boundaries must be finite"));
    }
    if boundaries
        .windows(2)
        .any(|pair| !(pair[0] < pair[1]) || !(pair[1] - pair[0]).is_finite())
    {
        return Err(RandomError::invalid(
            distribution,
            "boundaries must be strictly increasing",
        ));
    }
    Ok(())
}

fn interval_index<F: RealType>(
    distribution: &'static str,
    masses: impl Iterator<Item = F>,
) -> Result<WeightedIndex<f64>> {
    let masses: Vec<f64> = masses
        .map(|mass| mass.to_f64().unwrap_or(f64::NAN))
        .collect();
    WeightedIndex::new(&masses).map_err(|e| RandomError::invalid(distribution, e))
}

// ============================================================================
// Piecewise constant
// ============================================================================

/// Boundaries and per-interval weights of a [`PiecewiseConstant`] draw.
#[derive(Clone, Debug)]
pub struct PiecewiseConstantParam<F> {
    boundaries: Vec<F>,
    weights: Vec<F>,
    index: WeightedIndex<f64>,
}

impl<F: RealType> PiecewiseConstantParam<F> {
    /// Creates a parameter with `boundaries.len() - 1` intervals, interval
    /// `i` carrying constant density proportional to `weights[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] when boundaries are fewer
    /// than two, not strictly increasing or not finite; when the weight count
    /// does not match the interval count; or when the weights are negative or
    /// carry no mass.
    pub fn new(boundaries: Vec<F>, weights: Vec<F>) -> Result<Self> {
        check_boundaries(PiecewiseConstant::<F>::NAME, &boundaries)?;
        if weights.len() != boundaries.len() - 1 {
            return Err(RandomError::invalid(
                PiecewiseConstant::<F>::NAME,
                format!(
                    "{} intervals need {} weights, got {}",
                    boundaries.len() - 1,
                    boundaries.len() - 1,
                    weights.len()
                ),
            ));
        }
        let masses = boundaries
            .windows(2)
            .zip(&weights)
            .map(|(pair, &weight)| weight * (pair[1] - pair[0]));
        let index = interval_index(PiecewiseConstant::<F>::NAME, masses)?;
        Ok(Self {
            boundaries,
            weights,
            index,
        })
    }

    /// Interval boundaries.
    #[inline]
    pub fn boundaries(&self) -> &[F] {
        &self.boundaries
    }

    /// Per-interval weights.
    #[inline]
    pub fn weights(&self) -> &[F] {
        &self.weights
    }
}

impl<F: RealType> TryFrom<(Vec<F>, Vec<F>)> for PiecewiseConstantParam<F> {
    type Error = RandomError;

    fn try_from((boundaries, weights): (Vec<F>, Vec<F>)) -> Result<Self> {
        Self::new(boundaries, weights)
    }
}

impl<F: RealType> TryFrom<(&[F], &[F])> for PiecewiseConstantParam<F> {
    type Error = RandomError;

    fn try_from((boundaries, weights): (&[F], &[F])) -> Result<Self> {
        Self::new(boundaries.to_vec(), weights.to_vec())
    }
}

/// Reals with constant density on each of a list of subintervals.
#[derive(Clone, Debug)]
pub struct PiecewiseConstant<F> {
    param: PiecewiseConstantParam<F>,
}

impl<F: RealType> Default for PiecewiseConstant<F> {
    fn default() -> Self {
        Self {
            param: PiecewiseConstantParam::new(vec![F::zero(), F::one()], vec![F::one()])
                .expect("unit interval with unit weight is valid"),
        }
    }
}

impl<F: RealType> CatalogDistribution for PiecewiseConstant<F> {
    type Output = F;
    type Param = PiecewiseConstantParam<F>;
    const NAME: &'static str = "piecewise-constant";

    #[inline]
    fn param(&self) -> &Self::Param {
        &self.param
    }

    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> F {
        let interval = param.index.sample(rng);
        let (lo, hi) = (param.boundaries[interval], param.boundaries[interval + 1]);
        rng.gen_range(lo..hi)
    }
}

// ============================================================================
// Piecewise linear
// ============================================================================

/// Boundaries and boundary densities of a [`PiecewiseLinear`] draw.
#[derive(Clone, Debug)]
pub struct PiecewiseLinearParam<F> {
    boundaries: Vec<F>,
    densities: Vec<F>,
    index: WeightedIndex<f64>,
}

impl<F: RealType> PiecewiseLinearParam<F> {
    /// Creates a parameter whose density varies linearly between
    /// `densities[i]` at `boundaries[i]` and `densities[i + 1]` at
    /// `boundaries[i + 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] when boundaries are fewer
    /// than two, not strictly increasing or not finite; when the density
    /// count differs from the boundary count; or when the densities are
    /// negative or carry no mass.
    pub fn new(boundaries: Vec<F>, densities: Vec<F>) -> Result<Self> {
        check_boundaries(PiecewiseLinear::<F>::NAME, &boundaries)?;
        if densities.len() != boundaries.len() {
            return Err(RandomError::invalid(
                PiecewiseLinear::<F>::NAME,
                format!(
                    "{} boundaries need {} densities, got {}",
                    boundaries.len(),
                    boundaries.len(),
                    densities.len()
                ),
            ));
        }
        if densities.iter().any(|&d| d < F::zero()) {
            return Err(RandomError::invalid(
                PiecewiseLinear::<F>::NAME,
                "densities must be non-negative",
            ));
        }
        let half = F::one() / (F::one() + F::one());
        let masses = boundaries
            .windows(2)
            .zip(densities.windows(2))
            .map(|(b, d)| (d[0] + d[1]) * half * (b[1] - b[0]));
        let index = interval_index(PiecewiseLinear::<F>::NAME, masses)?;
        Ok(Self {
            boundaries,
            densities,
            index,
        })
    }

    /// Interval boundaries.
    #[inline]
    pub fn boundaries(&self) -> &[F] {
        &self.boundaries
    }

    /// Density at each boundary.
    #[inline]
    pub fn densities(&self) -> &[F] {
        &self.densities
    }
}

impl<F: RealType> TryFrom<(Vec<F>, Vec<F>)> for PiecewiseLinearParam<F> {
    type Error = RandomError;

    fn try_from((boundaries, densities): (Vec<F>, Vec<F>)) -> Result<Self> {
        Self::new(boundaries, densities)
    }
}

impl<F: RealType> TryFrom<(&[F], &[F])> for PiecewiseLinearParam<F> {
    type Error = RandomError;

    fn try_from((boundaries, densities): (&[F], &[F])) -> Result<Self> {
        Self::new(boundaries.to_vec(), densities.to_vec())
    }
}

/// Reals with linearly varying density on each of a list of subintervals.
#[derive(Clone, Debug)]
pub struct PiecewiseLinear<F> {
    param: PiecewiseLinearParam<F>,
}

impl<F: RealType> Default for PiecewiseLinear<F> {
    fn default() -> Self {
        Self {
            param: PiecewiseLinearParam::new(vec![F::zero(), F::one()], vec![F::one(), F::one()])
                .expect("unit interval with flat density is valid"),
        }
    }
}

impl<F: RealType> CatalogDistribution for PiecewiseLinear<F> {
    type Output = F;
    type Param = PiecewiseLinearParam<F>;
    const NAME: &'static str = "piecewise-linear";

    #[inline]
    fn param(&self) -> &Self::Param {
        &self.param
    }

    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, param: &Self::Param) -> F {
        let interval = param.index.sample(rng);
        let (lo, hi) = (param.boundaries[interval], param.boundaries[interval + 1]);
        let (d_lo, d_hi) = (param.densities[interval], param.densities[interval + 1]);

        // Inverse of the trapezoid CDF on [0, 1], in rationalised form so
        // equal densities need no special case
        let u: F = rng.gen_range(F::zero()..F::one());
        let numerator = u * (d_lo + d_hi);
        let denominator = d_lo + (d_lo * d_lo + (d_hi - d_lo) * numerator).sqrt();
        let fraction = if denominator > F::zero() {
            numerator / denominator
        } else {
            F::zero()
        };
        let value = lo + fraction * (hi - lo);
        if value < hi {
            value
        } else {
            lo
        }
    }
}
