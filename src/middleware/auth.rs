//! API key authentication middleware.
//!
//! This middleware intercepts every mutating request to:
//! 1. Extract the API key from the `x-api-key` header
//! 2. Compare it against the configured shared secret
//! 3. Reject unauthorized requests with HTTP 401

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::state::AppState;

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Extract the `x-api-key` header from the request
/// 2. Compare it against the shared secret from [`crate::config::Config`]
/// 3. If it matches: call the next handler
/// 4. If it is missing or wrong: respond 401 immediately
///
/// # Headers
///
/// Expected header format:
/// ```text
/// x-api-key: mysecretkey123
/// ```
///
/// # Responses
///
/// The rejection is written directly by this middleware rather than routed
/// through [`crate::error::AppError`]:
///
/// ```json
/// { "message": "Unauthorized: Invalid API key" }
/// ```
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok());

    if provided != Some(state.config.api_key.as_str()) {
        tracing::warn!(
            "{} {} rejected: missing or invalid API key",
            request.method(),
            request.uri()
        );
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthorized: Invalid API key" })),
        )
            .into_response();
    }

    next.run(request).await
}
