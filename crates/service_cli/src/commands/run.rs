//! Run command implementation
//!
//! Loads a sampler configuration from a TOML file.

use std::path::Path;

use random_core::config::SamplerConfig;
use tracing::info;

use super::{emit, OutputFormat};
use crate::{CliError, Result};

/// Run the run command
pub fn run(config_path: &str, count: usize, format: OutputFormat) -> Result<()> {
    info!("Loading sampler configuration from {}", config_path);
    let config = load(config_path)?;

    info!(
        kind = config.distribution.kind(),
        count,
        seed = ?config.seed,
        "Drawing samples"
    );
    emit(&config, count, format)
}

/// Reads and parses a sampler configuration file.
pub(crate) fn load(config_path: &str) -> Result<SamplerConfig> {
    if !Path::new(config_path).exists() {
        return Err(CliError::FileNotFound(config_path.to_string()));
    }

    let text = std::fs::read_to_string(config_path)?;
    Ok(SamplerConfig::from_toml_str(&text)?)
}
