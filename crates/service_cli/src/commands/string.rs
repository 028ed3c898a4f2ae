//! String command: prints one random string.

use randgen_core::CustomGenerator;
use tracing::info;

use crate::collaborators::RandomString;
use crate::config::DemoConfig;
use crate::Result;

/// Draws one string of `length` characters (configured length when absent)
/// over `charset` (configured charset when absent).
pub fn generate(config: &DemoConfig, length: Option<usize>, charset: Option<&str>) -> Result<String> {
    let length = length.unwrap_or(config.string_length);
    let charset = charset.unwrap_or(&config.charset);
    info!("Drawing {} characters from {:?}", length, charset);

    CustomGenerator::<RandomString, Result<String>>::value_param((length, charset))
}

/// Runs the string command.
pub fn run(config: &DemoConfig, length: Option<usize>, charset: Option<&str>) -> Result<()> {
    println!("{}", generate(config, length, charset)?);
    Ok(())
}
