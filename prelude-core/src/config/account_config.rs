use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Account credentials as stored in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Account handle, sent as the `account` header.
    pub handle: Option<String>,
    /// Account token, sent as the `token` header.
    pub token: Option<String>,
}

/// A complete pair of credentials ready to attach to requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account: String,
    pub token: String,
}

impl Credentials {
    pub fn new(account: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            token: token.into(),
        }
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl AccountConfig {
    /// Build credentials, failing if either half is missing or blank.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        match (non_blank(&self.handle), non_blank(&self.token)) {
            (Some(account), Some(token)) => Ok(Credentials::new(account, token)),
            _ => Err(ConfigError::MissingCredentials),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
