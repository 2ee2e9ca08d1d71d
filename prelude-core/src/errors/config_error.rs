/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {reason}")]
    Parse { reason: String },

    #[error("cannot read config {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("missing credentials: set an account handle and token")]
    MissingCredentials,
}
