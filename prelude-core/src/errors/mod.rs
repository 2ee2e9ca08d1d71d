//! Error types shared by every crate in the workspace.

mod config_error;
mod transport_error;

pub use config_error::ConfigError;
pub use transport_error::TransportError;

/// Top-level error for the Prelude Detect SDK.
#[derive(Debug, thiserror::Error)]
pub enum PreludeError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PreludeResult<T> = Result<T, PreludeError>;
