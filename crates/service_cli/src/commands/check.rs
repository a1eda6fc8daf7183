//! Check command implementation
//!
//! Draws once from every distribution against a fixed seed, confirming the
//! library is wired up end to end.

use random_core::config::{DistributionConfig, SamplerConfig};
use tracing::info;

use crate::Result;

/// Seed used for every check draw.
const CHECK_SEED: u64 = 42;

fn check_distributions() -> [DistributionConfig; 7] {
    [
        DistributionConfig::Gauss {
            mean: 0.0,
            stddev: 1.0,
        },
        DistributionConfig::Exp { mean: 1.0 },
        DistributionConfig::Flat { min: 0.0, max: 1.0 },
        DistributionConfig::Chi2 { ndf: 4 },
        DistributionConfig::Bernoulli { p: 0.5 },
        DistributionConfig::Binomial { n: 10, p: 0.5 },
        DistributionConfig::Poisson { mean: 3.0 },
    ]
}

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking random_core v{}", random_core::VERSION);

    for distribution in check_distributions() {
        let config = SamplerConfig {
            distribution,
            seed: Some(CHECK_SEED),
        };
        let mut sampler = config.build()?;
        info!("  {:<10} {}", distribution.kind(), sampler.draw());
    }

    info!("All distributions OK");
    Ok(())
}
