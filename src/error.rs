//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Resource Errors**: Requested products not found
/// - **Validation Errors**: Invalid or incomplete request data
/// - **Internal Errors**: Unclassified failures (e.g. request body I/O)
///
/// Authentication failures are not represented here: the API key middleware
/// responds with 401 directly instead of going through this error path.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested product does not exist in the store.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Product not found")]
    ProductNotFound,

    /// Request body failed validation.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String describes which check failed.
    #[error("{0}")]
    Validation(String),

    /// Unclassified runtime failure.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Validation error with the generic message used when the request body
    /// cannot be interpreted at all (e.g. malformed JSON).
    pub fn invalid_input() -> Self {
        AppError::Validation("Invalid input data".to_string())
    }
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "success": false,
///   "error": "Human-readable error message"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `ProductNotFound` → 404 Not Found
/// - `Validation` → 400 Bad Request
/// - `Internal` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::ProductNotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();

        // Every error is logged before the response is written
        tracing::error!("Error: {} ({})", message, status);

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::ProductNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = AppError::Validation("Price must be a number".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500() {
        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_input_uses_default_message() {
        assert_eq!(AppError::invalid_input().to_string(), "Invalid input data");
    }
}
