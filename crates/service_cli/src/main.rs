//! randgen CLI - Command Line Front End for the Generator Library
//!
//! Exercises `randgen_core` generators and custom capabilities from the
//! command line.
//!
//! # Commands
//!
//! - `randgen demo` - Print several rounds of assorted draws
//! - `randgen sample --dist <name>` - Draw from a catalog entry with summary statistics
//! - `randgen string` - Print one random string
//!
//! # Architecture
//!
//! As the service layer over `randgen_core`, this crate owns configuration,
//! logging setup and the example domain types; the library installs no
//! subscriber of its own.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod collaborators;
mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::sample::SampleRequest;
use config::DemoConfig;

/// randgen random value generator CLI
#[derive(Parser)]
#[command(name = "randgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "randgen.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print rounds of assorted draws
    Demo {
        /// Seed overriding the configured one
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of rounds overriding the configured one
        #[arg(short, long)]
        rounds: Option<usize>,
    },

    /// Draw from a catalog distribution
    Sample {
        /// Distribution (uniform-int, uniform-real, bernoulli, gaussian, exponential, poisson)
        #[arg(short, long)]
        dist: String,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Lower bound (uniform distributions)
        #[arg(long, allow_hyphen_values = true)]
        min: Option<f64>,

        /// Upper bound (uniform distributions)
        #[arg(long, allow_hyphen_values = true)]
        max: Option<f64>,

        /// Distribution parameter, repeatable (e.g. --param 10 --param 2 for gaussian)
        #[arg(short, long = "param", allow_hyphen_values = true)]
        params: Vec<f64>,

        /// Seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print one random string
    String {
        /// Number of characters
        #[arg(short, long)]
        length: Option<usize>,

        /// Characters to draw from
        #[arg(long)]
        charset: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut config = DemoConfig::load(&cli.config)?;

    match cli.command {
        Commands::Demo { seed, rounds } => {
            if seed.is_some() {
                config.seed = seed;
            }
            if let Some(rounds) = rounds {
                config.rounds = rounds;
            }
            commands::demo::run(&config)
        }
        Commands::Sample {
            dist,
            count,
            min,
            max,
            params,
            seed,
        } => commands::sample::run(&SampleRequest {
            dist,
            count,
            min,
            max,
            params,
            seed,
        }),
        Commands::String { length, charset } => {
            commands::string::run(&config, length, charset.as_deref())
        }
    }
}
