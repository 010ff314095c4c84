//! Data models for the product catalog.
//!
//! This module contains the product entity and the request/response
//! structures exchanged with API clients.

/// Product entity and API request/response types
pub mod product;
