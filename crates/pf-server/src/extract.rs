//! Request extractors: the tenant header and JSON bodies with API-shaped
//! rejections.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use pf_insight::UMBRELLA_HEADER;

use crate::error::ApiError;

/// Umbrella id (tenant) from a non-blank `x-umbrella-id` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Umbrella(pub String);

impl Umbrella {
    /// Read the tenant header. Missing, non-UTF-8 or blank values are `None`.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(UMBRELLA_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| Self(v.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Umbrella {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .or_else(|| Self::from_headers(&parts.headers))
            .ok_or(ApiError::AuthRequired)
    }
}

/// `Json<T>` whose rejection is `400 INVALID_BODY`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::InvalidBody(rejection.body_text())),
        }
    }
}
