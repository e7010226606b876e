//! Check configuration value objects.

use std::path::PathBuf;

use crate::domain::AppError;

/// TLS trust settings applied to remote fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustConfig {
    /// Disable certificate-chain verification entirely.
    pub skip_verify: bool,
    /// PEM bundle appended to the system trust store.
    pub ca_bundle: Option<PathBuf>,
}

impl TrustConfig {
    /// Whether remote fetches need a client other than the platform default.
    pub fn is_customized(&self) -> bool {
        self.skip_verify || self.ca_bundle.is_some()
    }
}

/// Inputs for one discovery run.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Prepended to every emitted subscription name.
    pub subscription_prefix: String,
    /// Mapping file locations, loaded in order.
    pub sources: Vec<String>,
    pub trust: TrustConfig,
}

impl DiscoveryConfig {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { sources: sources.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.subscription_prefix = prefix.into();
        self
    }

    pub fn with_trust(mut self, trust: TrustConfig) -> Self {
        self.trust = trust;
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.sources.is_empty() {
            return Err(AppError::config_error("--paths-file is required"));
        }
        Ok(())
    }
}
