//! Checked sampler construction from typed or TOML configuration.
//!
//! The raw constructors accept any parameters; this module is the place
//! where parameter domains are enforced.

mod distribution;
mod error;

pub use distribution::{DistributionConfig, Sample, Sampler, SamplerConfig, MAX_POISSON_MEAN};
pub use error::DistributionError;
