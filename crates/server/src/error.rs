use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use services::TriviaError;
use trivia_core::model::ParseUserError;

/// Failures surfaced by the question endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidUser(#[from] ParseUserError),
    #[error(transparent)]
    Upstream(#[from] TriviaError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // A failed provider status keeps its own message; every other
        // upstream failure collapses into the generic one.
        let (status, message) = match &self {
            ApiError::InvalidUser(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Upstream(TriviaError::HttpStatus(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch questions from Open Trivia DB.".to_string(),
            ),
            ApiError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch questions.".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Failures binding or running the server.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Environment variables that are set but do not parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value: {raw:?}")]
    Invalid { key: &'static str, raw: String },
}
