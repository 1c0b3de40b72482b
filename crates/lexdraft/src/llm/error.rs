//! LLM error types.

use thiserror::Error;

/// Errors that can occur when making LLM API calls.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request failed
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned a status other than 200
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// API returned 200 but the body had no first choice
    #[error("api response contained no choices")]
    EmptyResponse,
}

impl LLMError {
    /// True when the request never produced a usable HTTP exchange
    /// (connect, DNS, TLS, timeout).
    pub fn is_transport(&self) -> bool {
        match self {
            LLMError::Request(e) => !e.is_decode() && !e.is_status(),
            _ => false,
        }
    }
}
