use thiserror::Error;

/// Guidance carried by [`GatewayError::NoResponse`].
pub const NO_RESPONSE_GUIDANCE: &str = "server unreachable";

/// Detail used when a failed backend response names no reason.
pub const UNKNOWN_BACKEND_DETAIL: &str = "Unknown error";

/// Failure of a single command gateway exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {detail}")]
    Backend { status: u16, detail: String },

    /// No response was received (refused, unreachable, DNS, reset).
    #[error("no response from backend: {message}")]
    NoResponse { message: String },

    /// The bounded wait elapsed before the backend answered.
    #[error("request timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    /// The request could not be built or sent (client-side fault).
    #[error("request setup failed: {message}")]
    RequestSetup { message: String },
}

impl GatewayError {
    pub fn no_response() -> Self {
        GatewayError::NoResponse {
            message: NO_RESPONSE_GUIDANCE.to_string(),
        }
    }
}

/// Errors from durable transcript storage. Never shown to the user.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage read error: {0}")]
    Read(String),

    #[error("storage write error: {0}")]
    Write(String),

    #[error("stored transcript is corrupt: {0}")]
    Corrupt(String),
}

/// Errors from account scope selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("unknown account '{0}'")]
    Unknown(String),
}
