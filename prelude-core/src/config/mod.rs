//! Layered configuration: TOML file sections with defaults for every field.

mod account_config;
mod client_config;
pub mod defaults;
mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use account_config::{AccountConfig, Credentials};
pub use client_config::ClientConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::ConfigError;

/// Top-level configuration. Missing sections and fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreludeConfig {
    pub client: ClientConfig,
    pub account: AccountConfig,
    pub observability: ObservabilityConfig,
}

impl PreludeConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }

    /// Credentials from the `[account]` section.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        self.account.credentials()
    }
}
