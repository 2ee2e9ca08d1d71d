/// Errors raised by an authenticated client while talking to the API.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built (bad header, unparsable URL).
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {reason}")]
    Decode { reason: String },

    #[error("all {attempts} attempts failed: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<TransportError>,
    },
}

impl TransportError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::RetriesExhausted { last, .. } => last.status(),
            _ => None,
        }
    }

    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Status { status, .. } => *status >= 500,
            Self::InvalidRequest { .. } | Self::Decode { .. } | Self::RetriesExhausted { .. } => {
                false
            }
        }
    }
}
