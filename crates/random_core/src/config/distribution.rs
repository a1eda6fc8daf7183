//! Typed, validated descriptions of samplers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DistributionError;
use crate::distributions::{bernoulli, binomial, chi2, exp, flat, gauss, poisson};
use crate::rng::SharedSource;
use crate::sampler::{ContinuousSampler, DiscreteSampler};

/// Largest Poisson mean for which `exp(-mean)` stays a normal `f64`.
pub const MAX_POISSON_MEAN: f64 = 700.0;

/// A distribution and its parameters.
///
/// Deserialises from a table carrying a `kind` tag:
///
/// ```rust
/// use random_core::config::DistributionConfig;
///
/// let config: DistributionConfig = toml::from_str(
///     r#"
///     kind = "binomial"
///     n = 10
///     p = 0.5
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config, DistributionConfig::Binomial { n: 10, p: 0.5 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DistributionConfig {
    /// Normal with location `mean` and scale `stddev`.
    Gauss {
        /// Location.
        mean: f64,
        /// Scale, non-negative.
        stddev: f64,
    },
    /// Exponential with rate `mean` (expected value `1 / mean`).
    Exp {
        /// Rate, positive.
        mean: f64,
    },
    /// Uniform on `[min, max)`.
    Flat {
        /// Inclusive lower bound.
        min: f64,
        /// Exclusive upper bound, at least `min`.
        max: f64,
    },
    /// Chi-squared with `ndf` degrees of freedom.
    Chi2 {
        /// Degrees of freedom.
        ndf: u64,
    },
    /// Single biased coin.
    Bernoulli {
        /// Success probability in `[0, 1]`.
        p: f64,
    },
    /// Sum of `n + 1` Bernoulli trials.
    Binomial {
        /// Trial count parameter.
        n: u64,
        /// Success probability in `[0, 1]`.
        p: f64,
    },
    /// Poisson with the given mean count.
    Poisson {
        /// Mean in `[0, MAX_POISSON_MEAN]`.
        mean: f64,
    },
}

impl DistributionConfig {
    /// Returns the `kind` tag of this distribution.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Gauss { .. } => "gauss",
            Self::Exp { .. } => "exp",
            Self::Flat { .. } => "flat",
            Self::Chi2 { .. } => "chi2",
            Self::Bernoulli { .. } => "bernoulli",
            Self::Binomial { .. } => "binomial",
            Self::Poisson { .. } => "poisson",
        }
    }

    /// Returns `true` for integer-valued distributions.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Self::Bernoulli { .. } | Self::Binomial { .. } | Self::Poisson { .. }
        )
    }

    /// Validates the parameters against the distribution's domain.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` if:
    /// - any real parameter is NaN or infinite
    /// - `stddev < 0` (Gauss)
    /// - `mean <= 0` (Exp)
    /// - `min > max` (Flat)
    /// - `p` outside `[0, 1]` (Bernoulli, Binomial)
    /// - `mean` outside `[0, MAX_POISSON_MEAN]` (Poisson)
    pub fn validate(&self) -> Result<(), DistributionError> {
        match *self {
            Self::Gauss { mean, stddev } => {
                finite("mean", mean)?;
                finite("stddev", stddev)?;
                if stddev < 0.0 {
                    return Err(DistributionError::invalid(
                        "stddev",
                        format!("must be non-negative, got {}", stddev),
                    ));
                }
            }
            Self::Exp { mean } => {
                finite("mean", mean)?;
                if mean <= 0.0 {
                    return Err(DistributionError::invalid(
                        "mean",
                        format!("must be positive, got {}", mean),
                    ));
                }
            }
            Self::Flat { min, max } => {
                finite("min", min)?;
                finite("max", max)?;
                if min > max {
                    return Err(DistributionError::invalid(
                        "max",
                        format!("must be at least min ({}), got {}", min, max),
                    ));
                }
            }
            Self::Chi2 { .. } => {}
            Self::Bernoulli { p } | Self::Binomial { p, .. } => probability(p)?,
            Self::Poisson { mean } => {
                finite("mean", mean)?;
                if !(0.0..=MAX_POISSON_MEAN).contains(&mean) {
                    return Err(DistributionError::invalid(
                        "mean",
                        format!("must be in [0, {}], got {}", MAX_POISSON_MEAN, mean),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Validates, then builds a sampler bound to `src` (or to the process
    /// default when `None`).
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; see [`validate`](Self::validate).
    pub fn build(&self, src: Option<&SharedSource>) -> Result<Sampler, DistributionError> {
        self.validate()?;
        tracing::debug!(
            kind = self.kind(),
            caller_source = src.is_some(),
            "building sampler"
        );

        let sampler = match *self {
            Self::Gauss { mean, stddev } => Sampler::Continuous(Box::new(gauss(mean, stddev, src))),
            Self::Exp { mean } => Sampler::Continuous(Box::new(exp(mean, src))),
            Self::Flat { min, max } => Sampler::Continuous(Box::new(flat(min, max, src))),
            Self::Chi2 { ndf } => Sampler::Continuous(Box::new(chi2(ndf, src))),
            Self::Bernoulli { p } => Sampler::Discrete(Box::new(bernoulli(p, src))),
            Self::Binomial { n, p } => Sampler::Discrete(Box::new(binomial(n, p, src))),
            Self::Poisson { mean } => Sampler::Discrete(Box::new(poisson(mean, src))),
        };
        Ok(sampler)
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), DistributionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DistributionError::invalid(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

fn probability(p: f64) -> Result<(), DistributionError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(DistributionError::invalid(
            "p",
            format!("must be in [0, 1], got {}", p),
        ))
    }
}

/// A distribution plus an optional seed for a private source.
///
/// ```toml
/// seed = 42
///
/// [distribution]
/// kind = "poisson"
/// mean = 3.0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Distribution and parameters.
    pub distribution: DistributionConfig,
    /// Seed for a private `StdRng` source. Absent binds the process default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SamplerConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::Parse` for malformed TOML or unknown kinds.
    pub fn from_toml_str(text: &str) -> Result<Self, DistributionError> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the configured sampler.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of the distribution parameters.
    pub fn build(&self) -> Result<Sampler, DistributionError> {
        let source = self.seed.map(SharedSource::from_seed);
        self.distribution.build(source.as_ref())
    }
}

/// One drawn value, real or integer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sample {
    /// Draw from a continuous distribution.
    Real(f64),
    /// Draw from a discrete distribution.
    Count(i64),
}

impl Sample {
    /// Returns the value widened to `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Real(x) => x,
            Self::Count(k) => k as f64,
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(x) => write!(f, "{}", x),
            Self::Count(k) => write!(f, "{}", k),
        }
    }
}

/// Type-erased sampler produced from configuration.
pub enum Sampler {
    /// Real-valued sampler.
    Continuous(Box<dyn ContinuousSampler>),
    /// Integer-valued sampler.
    Discrete(Box<dyn DiscreteSampler>),
}

impl Sampler {
    /// Draws one value.
    pub fn draw(&mut self) -> Sample {
        match self {
            Self::Continuous(sampler) => Sample::Real(sampler.sample()),
            Self::Discrete(sampler) => Sample::Count(sampler.sample()),
        }
    }

    /// Draws one value widened to `f64`.
    pub fn sample_f64(&mut self) -> f64 {
        self.draw().as_f64()
    }

    /// Returns `true` for integer-valued samplers.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Discrete(_))
    }
}

impl fmt::Debug for Sampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuous(_) => f.write_str("Sampler::Continuous"),
            Self::Discrete(_) => f.write_str("Sampler::Discrete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(sampler: &mut Sampler, n: usize) -> Vec<Sample> {
        (0..n).map(|_| sampler.draw()).collect()
    }

    #[test]
    fn test_parse_sampler_config() {
        let config = SamplerConfig::from_toml_str(
            r#"
            seed = 42

            [distribution]
            kind = "gauss"
            mean = 10
            stddev = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.distribution,
            DistributionConfig::Gauss {
                mean: 10.0,
                stddev: 2.5
            }
        );
    }

    #[test]
    fn test_seed_is_optional() {
        let config = SamplerConfig::from_toml_str(
            r#"
            [distribution]
            kind = "chi2"
            ndf = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.distribution.kind(), "chi2");
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let result = SamplerConfig::from_toml_str(
            r#"
            [distribution]
            kind = "cauchy"
            "#,
        );
        assert!(matches!(result, Err(DistributionError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_domain() {
        let cases = [
            (DistributionConfig::Gauss { mean: 0.0, stddev: -1.0 }, "stddev"),
            (DistributionConfig::Gauss { mean: f64::NAN, stddev: 1.0 }, "mean"),
            (DistributionConfig::Exp { mean: 0.0 }, "mean"),
            (DistributionConfig::Flat { min: 2.0, max: 1.0 }, "max"),
            (DistributionConfig::Bernoulli { p: 1.5 }, "p"),
            (DistributionConfig::Binomial { n: 3, p: -0.1 }, "p"),
            (DistributionConfig::Poisson { mean: -1.0 }, "mean"),
            (DistributionConfig::Poisson { mean: 1.0e4 }, "mean"),
        ];

        for (config, expected) in cases {
            match config.validate() {
                Err(DistributionError::InvalidParameter { name, .. }) => {
                    assert_eq!(name, expected, "{:?}", config)
                }
                other => panic!("expected InvalidParameter for {:?}, got {:?}", config, other),
            }
        }
    }

    #[test]
    fn test_validate_accepts_boundaries() {
        let cases = [
            DistributionConfig::Gauss { mean: 0.0, stddev: 0.0 },
            DistributionConfig::Flat { min: 1.0, max: 1.0 },
            DistributionConfig::Chi2 { ndf: 0 },
            DistributionConfig::Bernoulli { p: 0.0 },
            DistributionConfig::Bernoulli { p: 1.0 },
            DistributionConfig::Binomial { n: 0, p: 1.0 },
            DistributionConfig::Poisson { mean: 0.0 },
            DistributionConfig::Poisson { mean: MAX_POISSON_MEAN },
        ];
        for config in cases {
            assert!(config.validate().is_ok(), "{:?}", config);
        }
    }

    #[test]
    fn test_build_kind_matches_output() {
        let src = SharedSource::from_seed(1);
        let continuous = DistributionConfig::Flat { min: 0.0, max: 1.0 };
        let discrete = DistributionConfig::Poisson { mean: 2.0 };

        let mut flat = continuous.build(Some(&src)).unwrap();
        let mut counts = discrete.build(Some(&src)).unwrap();

        assert!(!continuous.is_discrete() && !flat.is_discrete());
        assert!(discrete.is_discrete() && counts.is_discrete());
        assert!(matches!(flat.draw(), Sample::Real(_)));
        assert!(matches!(counts.draw(), Sample::Count(_)));
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = SamplerConfig {
            distribution: DistributionConfig::Binomial { n: 10, p: 0.3 },
            seed: Some(7),
        };

        let mut first = config.build().unwrap();
        let mut second = config.build().unwrap();
        assert_eq!(draws(&mut first, 100), draws(&mut second, 100));
    }

    #[test]
    fn test_build_matches_raw_constructor() {
        let config = SamplerConfig {
            distribution: DistributionConfig::Exp { mean: 2.0 },
            seed: Some(19),
        };
        let mut configured = config.build().unwrap();
        let mut raw = exp(2.0, Some(&SharedSource::from_seed(19)));

        for _ in 0..100 {
            assert_eq!(configured.sample_f64(), raw.sample());
        }
    }

    #[test]
    fn test_build_rejects_invalid() {
        let config = DistributionConfig::Exp { mean: -2.0 };
        assert!(config.build(None).is_err());
    }

    #[test]
    fn test_sample_display_and_widening() {
        assert_eq!(Sample::Count(3).to_string(), "3");
        assert_eq!(Sample::Real(0.5).to_string(), "0.5");
        assert_eq!(Sample::Count(3).as_f64(), 3.0);
    }

    #[test]
    fn test_config_serialises_without_absent_seed() {
        let value = toml::Value::try_from(SamplerConfig {
            distribution: DistributionConfig::Poisson { mean: 1.0 },
            seed: None,
        })
        .unwrap();

        assert!(value.get("seed").is_none());
        assert_eq!(value["distribution"]["kind"].as_str(), Some("poisson"));
    }
}
