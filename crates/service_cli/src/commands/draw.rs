//! Draw command implementation
//!
//! Builds a sampler from a kind and `name=value` parameters given on the
//! command line.

use random_core::config::{DistributionConfig, SamplerConfig};
use toml::{Table, Value};
use tracing::info;

use super::{emit, OutputFormat};
use crate::{CliError, Result};

/// Run the draw command
pub fn run(
    kind: &str,
    params: &[String],
    count: usize,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let config = SamplerConfig {
        distribution: parse_distribution(kind, params)?,
        seed,
    };

    info!(kind, count, seed = ?seed, "Drawing samples");
    emit(&config, count, format)
}

/// Assembles a distribution from its kind and `name=value` parameters.
pub(crate) fn parse_distribution(kind: &str, params: &[String]) -> Result<DistributionConfig> {
    let mut table = Table::new();
    table.insert("kind".to_string(), Value::String(kind.to_lowercase()));

    for param in params {
        let (name, value) = parse_param(param)?;
        if table.insert(name.to_string(), value).is_some() {
            return Err(CliError::InvalidArgument(format!(
                "Parameter '{}' given more than once",
                name
            )));
        }
    }

    Value::Table(table)
        .try_into::<DistributionConfig>()
        .map_err(|e| {
            CliError::InvalidArgument(format!("Cannot build '{}' distribution: {}", kind, e))
        })
}

/// Splits `name=value`; integers stay integers so count parameters parse.
fn parse_param(param: &str) -> Result<(&str, Value)> {
    let (name, raw) = param.split_once('=').ok_or_else(|| {
        CliError::InvalidArgument(format!("Expected NAME=VALUE, got '{}'", param))
    })?;
    let (name, raw) = (name.trim(), raw.trim());

    if name.is_empty() || name == "kind" {
        return Err(CliError::InvalidArgument(format!(
            "Invalid parameter name in '{}'",
            param
        )));
    }

    if let Ok(int) = raw.parse::<i64>() {
        return Ok((name, Value::Integer(int)));
    }
    raw.parse::<f64>()
        .map(|float| (name, Value::Float(float)))
        .map_err(|_| {
            CliError::InvalidArgument(format!("Value of '{}' is not a number: '{}'", name, raw))
        })
}
