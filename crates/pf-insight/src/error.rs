//! Insight error types.

use thiserror::Error;

/// Errors from a single insight or provider call.
///
/// The gateway absorbs all of these; they only surface directly from the
/// transport and provider clients.
#[derive(Debug, Error)]
pub enum InsightError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The endpoint answered 2xx but reported failure, or returned nothing
    /// usable.
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// No provider API key is configured.
    #[error("no model API key configured")]
    MissingApiKey,

    /// The prompt was missing or blank.
    #[error("prompt must not be empty")]
    EmptyPrompt,
}
