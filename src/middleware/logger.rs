//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

/// Log method, URI, and an ISO-8601 timestamp for every request.
///
/// Purely observational: this middleware never short-circuits or rejects.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        "[{}] {} {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        request.method(),
        request.uri()
    );

    next.run(request).await
}
