//! Error types for checked sampler configuration.

use thiserror::Error;

/// Configuration error for sampler construction.
///
/// Raised only by the checked configuration path; the raw constructors in
/// [`crate::distributions`] never fail.
#[derive(Debug, Error)]
pub enum DistributionError {
    /// Parameter outside the distribution's domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Configuration text could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl DistributionError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
