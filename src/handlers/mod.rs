//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, query params)
//! 2. Reads or mutates the product store
//! 3. Returns an HTTP response (JSON, status code)

/// Liveness probe endpoint
pub mod health;

/// Welcome route
pub mod home;

/// Product catalog endpoints
pub mod products;
