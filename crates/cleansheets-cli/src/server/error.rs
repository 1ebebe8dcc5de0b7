//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use cleansheets::CleanSheetsError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client.
    BadRequest(String),
    /// Unsupported HTTP method on the endpoint.
    MethodNotAllowed,
    /// Internal server error.
    Internal(String),
    /// Error from the cleansheets library.
    CleanSheets(CleanSheetsError),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The 405 body carries no success flag, unlike the other errors.
        if let ApiError::MethodNotAllowed = self {
            return (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method not allowed" })),
            )
                .into_response();
        }

        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::CleanSheets(e) => match e {
                CleanSheetsError::EmptyData(msg) => (StatusCode::BAD_REQUEST, msg),
                other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
            },
            ApiError::MethodNotAllowed => unreachable!(),
        };

        if status.is_server_error() {
            eprintln!("API error: {}", error);
        }

        (
            status,
            Json(ErrorResponse {
                success: false,
                error,
            }),
        )
            .into_response()
    }
}

impl From<CleanSheetsError> for ApiError {
    fn from(err: CleanSheetsError) -> Self {
        ApiError::CleanSheets(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::MethodNotAllowed => write!(f, "Method not allowed"),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::CleanSheets(e) => write!(f, "CleanSheets error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
