//! Product data models and API request/response types.
//!
//! This module defines:
//! - `Product`: the catalog entity held in the store
//! - `CreateProductRequest` / `UpdateProductRequest`: request bodies
//! - `ProductPage`, `SearchResults`, `CatalogStats`: response bodies
//!
//! All wire field names are camelCase (`inStock`, `totalProducts`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A product record in the catalog.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "1",
///   "name": "Laptop",
///   "description": "High-performance laptop with 16GB RAM",
///   "price": 1200.0,
///   "category": "electronics",
///   "inStock": true
/// }
/// ```
///
/// # Identifier
///
/// `id` is a string assigned by the store from a monotonic counter, so it
/// stays unique even after deletions. It is never taken from client input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier for this product
    pub id: String,

    /// Display name, non-empty
    pub name: String,

    /// Free-form description, non-empty
    pub description: String,

    /// Unit price
    pub price: f64,

    /// Category label, matched case-insensitively by filters and stats
    pub category: String,

    /// Whether the product is currently in stock
    pub in_stock: bool,
}

/// Request body for creating a new product.
///
/// All five fields are required. Presence and type checks happen in the
/// validation middleware before this struct is deserialized, so extraction
/// failures only occur for requests that bypassed validation.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Desk Lamp",
///   "description": "Adjustable LED desk lamp",
///   "price": 35.5,
///   "category": "furniture",
///   "inStock": true
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Request body for updating an existing product.
///
/// Every field is optional: fields present in the payload overwrite the
/// stored value, fields absent are left untouched (shallow merge).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// Response body for the paginated product listing.
///
/// `total_products` and `total_pages` are computed over the filtered set,
/// not the whole catalog.
///
/// # JSON Example
///
/// ```json
/// {
///   "totalProducts": 3,
///   "currentPage": 1,
///   "totalPages": 1,
///   "products": [ ... ]
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub total_products: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub products: Vec<Product>,
}

/// Response body for name search.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    /// The search term as provided by the client
    pub query: String,

    /// Number of matching products
    pub total: usize,

    /// The matching products
    pub results: Vec<Product>,
}

/// Response body for catalog statistics.
///
/// # JSON Example
///
/// ```json
/// {
///   "totalProducts": 3,
///   "countByCategory": {
///     "electronics": 2,
///     "kitchen": 1
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,

    /// Product count keyed by lower-cased category
    pub count_by_category: BTreeMap<String, usize>,
}
