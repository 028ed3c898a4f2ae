//! Random strings over a character set.

use rand::Rng;
use randgen_core::distributions::{CatalogDistribution, UniformInt, UniformIntParam};
use randgen_core::RandomValueWith;

use crate::{CliError, Result};

/// Digits followed by upper- and lower-case ASCII letters.
pub const DEFAULT_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Strings whose characters are drawn uniformly from a character set.
///
/// - `RandomValueWith<usize>`: `length` characters from [`DEFAULT_CHARSET`]
/// - `RandomValueWith<(usize, &str)>`: `length` characters from the given set
///
/// Characters are Unicode scalar values, so a multi-byte set yields strings
/// whose byte length exceeds `length`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomString;

impl RandomValueWith<usize> for RandomString {
    type Output = Result<String>;

    fn random_value_with_from<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String> {
        <Self as RandomValueWith<(usize, &str)>>::random_value_with_from(
            rng,
            (length, DEFAULT_CHARSET),
        )
    }
}

impl<'a> RandomValueWith<(usize, &'a str)> for RandomString {
    type Output = Result<String>;

    fn random_value_with_from<R: Rng + ?Sized>(
        rng: &mut R,
        (length, charset): (usize, &'a str),
    ) -> Result<String> {
        if length == 0 {
            return Ok(String::new());
        }
        let chars: Vec<char> = charset.chars().collect();
        if chars.is_empty() {
            return Err(CliError::EmptyCharset { length });
        }

        let picker = UniformInt::<usize>::default();
        let positions = UniformIntParam::new(0, chars.len() - 1)?;
        Ok((0..length)
            .map(|_| chars[picker.sample_with(rng, &positions)])
            .collect())
    }
}
