//! API error type and its JSON rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use pf_core::responses::ErrorResponse;
use pf_ledger::LedgerError;

/// Every failure a route can report. Rendered as
/// `{ "error": CODE, "message"?: ... }` with the matching status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("x-umbrella-id header is required")]
    AuthRequired,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidTransition(String),

    #[error("{0}")]
    InvalidBody(String),

    #[error("prompt is required")]
    PromptRequired,

    #[error("no model API key is configured")]
    MissingApiKey,

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::AuthRequired => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidTransition(_) => StatusCode::CONFLICT,
            Self::InvalidBody(_) | Self::PromptRequired => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Machine-readable code sent as `error`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AuthRequired => "AUTH_REQUIRED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidTransition(_) => "INVALID_TRANSITION",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::PromptRequired => "PROMPT_REQUIRED",
            Self::MissingApiKey => "MISSING_API_KEY",
            Self::Upstream(_) => "AI_UPSTREAM_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The bare auth error carries no message, matching what dashboard
    /// clients already check for.
    fn message(&self) -> Option<String> {
        match self {
            Self::AuthRequired => None,
            other => Some(other.to_string()),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound { .. } => Self::NotFound(err.to_string()),
            LedgerError::InvalidTransition { .. } => Self::InvalidTransition(err.to_string()),
            LedgerError::Validation(msg) => Self::InvalidBody(msg),
            LedgerError::IdSpaceExhausted(_) | LedgerError::Core(_) => {
                tracing::error!(error = %err, "ledger failure");
                Self::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
