//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Authenticate requests
//! - Log requests
//! - Validate request bodies
//! - Short-circuit requests (reject unauthorized)

/// API key authentication middleware
pub mod auth;

/// Request logging middleware
pub mod logger;

/// Product payload validation middleware
pub mod validate;
