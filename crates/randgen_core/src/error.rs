//! Error types for generator construction and drawing.
//!
//! Drawing with default parameters never fails. Errors only arise when a
//! caller supplies bounds or parameters the underlying distribution family
//! cannot honour.

use std::fmt::{Debug, Display};
use thiserror::Error;

/// Errors raised by parameterised and ranged draws.
///
/// # Variants
/// - `InvertedRange`: `min` is greater than `max`
/// - `NonFiniteBound`: a real bound (or the span between bounds) is not finite
/// - `InvalidParameter`: a distribution rejected its parameter object
///
/// # Examples
/// ```
/// use randgen_core::RandomError;
///
/// let err = RandomError::InvertedRange { min: "10".into(), max: "1".into() };
/// assert_eq!(err.to_string(), "Inverted range: min 10 is greater than max 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// Lower bound greater than upper bound.
    #[error("Inverted range: min {min} is greater than max {max}")]
    InvertedRange {
        /// Rendered lower bound
        min: String,
        /// Rendered upper bound
        max: String,
    },

    /// Real bound that is infinite or NaN, or whose span overflows.
    #[error("Non-finite range bound: [{min}, {max}]")]
    NonFiniteBound {
        /// Rendered lower bound
        min: String,
        /// Rendered upper bound
        max: String,
    },

    /// Parameter rejected by a catalog distribution.
    #[error("Invalid {distribution} parameter: {reason}")]
    InvalidParameter {
        /// Catalog name of the distribution
        distribution: &'static str,
        /// Why the parameter was rejected
        reason: String,
    },
}

impl RandomError {
    pub(crate) fn inverted<T: Debug>(min: T, max: T) -> Self {
        Self::InvertedRange {
            min: format!("{:?}", min),
            max: format!("{:?}", max),
        }
    }

    pub(crate) fn non_finite<T: Debug>(min: T, max: T) -> Self {
        Self::NonFiniteBound {
            min: format!("{:?}", min),
            max: format!("{:?}", max),
        }
    }

    pub(crate) fn invalid(distribution: &'static str, reason: impl Display) -> Self {
        Self::InvalidParameter {
            distribution,
            reason: reason.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range_display() {
        let err = RandomError::inverted(10, 1);
        assert_eq!(err.to_string(), "Inverted range: min 10 is greater than max 1");
    }

    #[test]
    fn test_non_finite_display() {
        let err = RandomError::non_finite(f64::NEG_INFINITY, 1.0);
        assert!(err.to_string().contains("-inf"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = RandomError::invalid("bernoulli", "p is outside [0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid bernoulli parameter: p is outside [0, 1]"
        );
    }
}
