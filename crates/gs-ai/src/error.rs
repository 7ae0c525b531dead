//! Gateway error types.

use gs_core::errors::CoreError;
use thiserror::Error;

/// Errors that can occur when calling the generative model.
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key was configured for the provider.
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the provider asked us to wait.
        retry_after_secs: u64,
    },

    /// The provider's response envelope could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors surfaced by [`IdeaGateway::generate`](crate::IdeaGateway::generate).
///
/// A malformed model *payload* is not an error: it degrades to an empty
/// draft list.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Mode resolution failed (`CoreError::InvalidMode`).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The model call itself failed.
    #[error(transparent)]
    Model(#[from] AiError),
}
