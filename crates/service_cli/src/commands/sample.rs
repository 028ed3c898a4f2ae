//! Sample command: draws from a named catalog entry and summarises them.

use randgen_core::distributions::{
    Bernoulli, CatalogDistribution, Exponential, Gaussian, Poisson, UniformInt, UniformReal,
};
use randgen_core::engine::{DefaultEngine, EntropySeed, ExplicitSeed, SeedSource};
use randgen_core::{Generator, RandomError};
use tracing::{info, warn};

use crate::{CliError, Result};

/// Catalog entries the command can draw from.
pub const SUPPORTED: &[&str] = &[
    "uniform-int",
    "uniform-real",
    "bernoulli",
    "gaussian",
    "exponential",
    "poisson",
];

/// Arguments of one `sample` invocation.
#[derive(Clone, Debug, Default)]
pub struct SampleRequest {
    /// Catalog entry name
    pub dist: String,
    /// Number of draws
    pub count: usize,
    /// Lower bound, uniform entries only
    pub min: Option<f64>,
    /// Upper bound, uniform entries only
    pub max: Option<f64>,
    /// Distribution parameters, in catalog order
    pub params: Vec<f64>,
    /// Seed; fresh entropy when absent
    pub seed: Option<u64>,
}

/// Summary statistics of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (zero below two values)
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl Summary {
    /// Summarises `values`, or `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        } else {
            0.0
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            mean,
            std_dev,
            min,
            max,
        })
    }
}

/// Draws the requested sample as `f64` values.
pub fn draw(request: &SampleRequest, seed: u64) -> Result<Vec<f64>> {
    let bounds = bounds(request)?;
    if bounds.is_some() && !request.dist.starts_with("uniform-") {
        return Err(CliError::InvalidArgument(format!(
            "{} does not take --min/--max",
            request.dist
        )));
    }

    match request.dist.as_str() {
        "uniform-int" => {
            no_params(request)?;
            let mut gen: Generator<i64, UniformInt<i64>, DefaultEngine, ExplicitSeed> =
                Generator::from_seed(seed);
            match bounds {
                Some((min, max)) => {
                    let (min, max) = (integral(min)?, integral(max)?);
                    (0..request.count)
                        .map(|_| gen.range(min, max).map(|v| v as f64).map_err(CliError::from))
                        .collect()
                }
                None => Ok((0..request.count).map(|_| gen.value() as f64).collect()),
            }
        }
        "uniform-real" => {
            no_params(request)?;
            let mut gen: Generator<f64, UniformReal<f64>, DefaultEngine, ExplicitSeed> =
                Generator::from_seed(seed);
            match bounds {
                Some((min, max)) => (0..request.count)
                    .map(|_| gen.range(min, max).map_err(CliError::from))
                    .collect(),
                None => Ok((0..request.count).map(|_| gen.value()).collect()),
            }
        }
        "bernoulli" => draw_catalog::<Bernoulli, _>(
            seed,
            request.count,
            one_param(request)?,
            |hit| if hit { 1.0 } else { 0.0 },
        ),
        "gaussian" => draw_catalog::<Gaussian<f64>, _>(
            seed,
            request.count,
            two_params(request)?,
            |value| value,
        ),
        "exponential" => draw_catalog::<Exponential<f64>, _>(
            seed,
            request.count,
            one_param(request)?,
            |value| value,
        ),
        "poisson" => draw_catalog::<Poisson<u64>, _>(
            seed,
            request.count,
            one_param(request)?,
            |value| value as f64,
        ),
        other => {
            warn!("Unknown distribution: {}", other);
            Err(CliError::InvalidArgument(format!(
                "Unknown distribution: {}. Supported: {}",
                other,
                SUPPORTED.join(", ")
            )))
        }
    }
}

/// Runs the sample command, printing each value and a summary.
pub fn run(request: &SampleRequest) -> Result<()> {
    let seed = request.seed.unwrap_or_else(|| EntropySeed.next_seed());
    info!(
        "Sampling {} values from {} (seed {})",
        request.count, request.dist, seed
    );

    let values = draw(request, seed)?;
    for value in &values {
        println!("{}", value);
    }

    if let Some(summary) = Summary::from_values(&values) {
        println!("----------------------------------------");
        println!("count   : {}", summary.count);
        println!("mean    : {:.6}", summary.mean);
        println!("std dev : {:.6}", summary.std_dev);
        println!("min     : {}", summary.min);
        println!("max     : {}", summary.max);
        println!("seed    : {}", seed);
    }
    Ok(())
}

/// Draws with the entry's defaults, or with parameters built from `args`.
fn draw_catalog<D, P>(
    seed: u64,
    count: usize,
    args: Option<P>,
    to_f64: impl Fn(D::Output) -> f64,
) -> Result<Vec<f64>>
where
    D: CatalogDistribution,
    P: TryInto<D::Param, Error = RandomError>,
{
    let mut gen: Generator<D::Output, D, DefaultEngine, ExplicitSeed> = Generator::from_seed(seed);
    let param = match args {
        Some(args) => args.try_into()?,
        None => gen.distribution().param().clone(),
    };
    Ok((0..count).map(|_| to_f64(gen.value_with(&param))).collect())
}

fn bounds(request: &SampleRequest) -> Result<Option<(f64, f64)>> {
    match (request.min, request.max) {
        (Some(min), Some(max)) => Ok(Some((min, max))),
        (None, None) => Ok(None),
        _ => Err(CliError::InvalidArgument(
            "--min and --max must be given together".to_string(),
        )),
    }
}

fn integral(bound: f64) -> Result<i64> {
    if bound.fract() != 0.0 || bound < i64::MIN as f64 || bound >= i64::MAX as f64 {
        return Err(CliError::InvalidArgument(format!(
            "{} is not a 64-bit integer bound",
            bound
        )));
    }
    Ok(bound as i64)
}

fn no_params(request: &SampleRequest) -> Result<()> {
    if request.params.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvalidArgument(format!(
            "{} takes bounds, not --param",
            request.dist
        )))
    }
}

fn one_param(request: &SampleRequest) -> Result<Option<f64>> {
    match request.params.as_slice() {
        [] => Ok(None),
        [value] => Ok(Some(*value)),
        params => Err(CliError::InvalidArgument(format!(
            "{} takes one --param, got {}",
            request.dist,
            params.len()
        ))),
    }
}

fn two_params(request: &SampleRequest) -> Result<Option<(f64, f64)>> {
    match request.params.as_slice() {
        [] => Ok(None),
        [first, second] => Ok(Some((*first, *second))),
        params => Err(CliError::InvalidArgument(format!(
            "{} takes two --param values, got {}",
            request.dist,
            params.len()
        ))),
    }
}
