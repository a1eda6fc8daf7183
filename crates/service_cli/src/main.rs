//! Variates CLI - Command Line Sampling for random_core
//!
//! This is the operational entry point for the random_core sampler library.
//!
//! # Commands
//!
//! - `variates draw <kind> -p name=value ...` - Draw from a distribution given inline
//! - `variates run --config <file>` - Draw from a distribution described in TOML
//! - `variates check` - Draw once from every distribution against a fixed seed
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only parses arguments,
//! installs logging and formats output; all sampling lives in `random_core`.

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

use commands::OutputFormat;
pub use error::{CliError, Result};

/// Random variate sampling CLI
#[derive(Parser)]
#[command(name = "variates")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw samples from a distribution given on the command line
    Draw {
        /// Distribution kind (gauss, exp, flat, chi2, bernoulli, binomial, poisson)
        kind: String,

        /// Distribution parameter as name=value (repeatable)
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// Number of samples to draw
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Seed for a private source (default: process generator)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Draw samples from a distribution described in a TOML file
    Run {
        /// Path to sampler configuration (TOML)
        #[arg(short, long)]
        config: String,

        /// Number of samples to draw
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Draw once from every distribution against a fixed seed
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    info!("variates v{}", random_core::VERSION);
    if cli.verbose {
        debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Draw {
            kind,
            params,
            count,
            seed,
            format,
        } => commands::draw::run(&kind, &params, count, seed, format),
        Commands::Run {
            config,
            count,
            format,
        } => commands::run::run(&config, count, format),
        Commands::Check => commands::check::run(),
    }
}
