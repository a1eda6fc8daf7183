//! CLI command implementations
//!
//! Each submodule implements a specific CLI command; output formatting is
//! shared here.

pub mod check;
pub mod draw;
pub mod run;

use std::io::{BufWriter, Write};

use clap::ValueEnum;
use random_core::config::{Sample, Sampler, SamplerConfig};
use serde::Serialize;

use crate::Result;

/// Output format for drawn samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One sample per line
    #[default]
    Plain,
    /// JSON document with the configuration and samples
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    config: &'a SamplerConfig,
    samples: &'a [Sample],
}

/// Draws `count` samples from `sampler`.
pub(crate) fn draw_samples(sampler: &mut Sampler, count: usize) -> Vec<Sample> {
    (0..count).map(|_| sampler.draw()).collect()
}

/// Writes `count` samples, one per line, as they are drawn.
pub(crate) fn write_plain<W: Write>(
    sampler: &mut Sampler,
    count: usize,
    out: &mut W,
) -> Result<()> {
    for _ in 0..count {
        writeln!(out, "{}", sampler.draw())?;
    }
    Ok(())
}

/// Renders the configuration and samples as a JSON document.
pub(crate) fn render_json(config: &SamplerConfig, samples: &[Sample]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report { config, samples })?)
}

/// Builds the sampler, draws and writes the samples to stdout.
///
/// Plain output streams; JSON holds all samples until the document is written.
pub(crate) fn emit(config: &SamplerConfig, count: usize, format: OutputFormat) -> Result<()> {
    let mut sampler = config.build()?;
    let mut stdout = BufWriter::new(std::io::stdout().lock());

    match format {
        OutputFormat::Plain => write_plain(&mut sampler, count, &mut stdout)?,
        OutputFormat::Json => {
            let samples = draw_samples(&mut sampler, count);
            writeln!(stdout, "{}", render_json(config, &samples)?)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
