//! API error taxonomy and HTTP rendering.
//!
//! Three failure classes cover every request:
//! - [`ApiError::Validation`] - caller input failed a required-field or
//!   precondition check; 400, message names what was missing.
//! - [`ApiError::NotFound`] - the session holds no such resource; 404,
//!   always recoverable by re-running the setup step.
//! - [`ApiError::Upstream`] - the generation service failed; 500 with a
//!   fixed message. The cause is logged at the call site, never sent to
//!   the client.
//!
//! No error here is fatal to the process; every failure is scoped to one
//! request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Request-scoped failure, rendered as a JSON error response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller-supplied input failed a required-field check.
    #[error("{0}")]
    Validation(String),
    /// Requested session-scoped resource is absent.
    #[error("{0}")]
    NotFound(String),
    /// The generation service failed or returned an unusable result.
    #[error("schedule generation failed")]
    Upstream,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 404s use a "message" key, everything else an "error" key. This
        // asymmetry is part of the observable contract.
        match self {
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": message })),
            )
                .into_response(),
            Self::Upstream => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "An error occurred while processing the task." })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400_with_error_key() {
        let response = ApiError::validation("All schedule fields are required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::not_found("No schedule found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_maps_to_500() {
        let response = ApiError::Upstream.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
