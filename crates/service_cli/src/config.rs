//! Demo configuration.
//!
//! Loaded from a TOML file; every field is optional and a missing file falls
//! back to the defaults.
//!
//! ```toml
//! rounds = 3
//! seed = 42
//! bool_probability = 0.25
//! string_length = 8
//! charset = "ACGT"
//! vowel_string_length = 10
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::collaborators::DEFAULT_CHARSET;
use crate::{CliError, Result};

/// Settings for the `demo` and `string` commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Number of demo rounds
    pub rounds: usize,
    /// Seed for a reproducible run; fresh entropy when absent
    pub seed: Option<u64>,
    /// Success probability of the boolean draw
    pub bool_probability: f64,
    /// Length of the default-charset string
    pub string_length: usize,
    /// Characters the default-charset string is drawn from
    pub charset: String,
    /// Length of the vowel string
    pub vowel_string_length: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            seed: None,
            bool_probability: 0.5,
            string_length: 5,
            charset: DEFAULT_CHARSET.to_string(),
            vowel_string_length: 10,
        }
    }
}

impl DemoConfig {
    /// Loads the configuration at `path`, or the defaults when no file
    /// exists there.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DemoConfig = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.bool_probability) {
            return Err(CliError::Config(format!(
                "bool_probability {} is outside [0, 1]",
                self.bool_probability
            )));
        }
        if self.charset.is_empty() && self.string_length > 0 {
            return Err(CliError::Config(
                "charset is empty but string_length is non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
