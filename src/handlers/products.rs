//! Product catalog HTTP handlers.
//!
//! This module implements the product API endpoints:
//! - GET /api/products - List products with filtering and pagination
//! - GET /api/products/search - Search products by name
//! - GET /api/products/stats - Catalog statistics
//! - GET /api/products/{id} - Get a specific product
//! - POST /api/products - Create a new product
//! - PUT /api/products/{id} - Update a product
//! - DELETE /api/products/{id} - Delete a product

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppError,
    models::product::{
        CatalogStats, CreateProductRequest, Product, ProductPage, SearchResults,
        UpdateProductRequest,
    },
    state::AppState,
};

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Case-insensitive exact category filter
    pub category: Option<String>,

    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: usize,

    /// Page size
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    5
}

/// Query parameters for product search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

/// List products with optional category filter and pagination.
///
/// # Endpoint
///
/// `GET /api/products?category=electronics&page=1&limit=5`
///
/// # Query Parameters
///
/// - `category` (optional): case-insensitive exact match filter
/// - `page` (optional): 1-based page number, defaults to 1
/// - `limit` (optional): page size, defaults to 5
///
/// # Response (200 OK)
///
/// `totalProducts` and `totalPages` are computed over the filtered set:
///
/// ```json
/// {
///   "totalProducts": 2,
///   "currentPage": 1,
///   "totalPages": 1,
///   "products": [ ... ]
/// }
/// ```
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsQuery>,
) -> Json<ProductPage> {
    let store = state.store.read().await;

    let filtered: Vec<Product> = store
        .list()
        .iter()
        .filter(|product| {
            params
                .category
                .as_deref()
                .is_none_or(|category| product.category.eq_ignore_ascii_case(category))
        })
        .cloned()
        .collect();

    // page and limit are 1-based; zero would underflow the slice arithmetic
    let page = params.page.max(1);
    let limit = params.limit.max(1);

    let total_products = filtered.len();
    let total_pages = total_products.div_ceil(limit);

    let products = filtered
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    Json(ProductPage {
        total_products,
        current_page: page,
        total_pages,
        products,
    })
}

/// Search products by name.
///
/// # Endpoint
///
/// `GET /api/products/search?name=lap`
///
/// Matches products whose name contains the term, case-insensitively.
/// A missing or empty `name` is answered directly with 400 — this simple
/// check does not go through the central error layer.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "query": "lap",
///   "total": 1,
///   "results": [ ... ]
/// }
/// ```
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let Some(term) = params.name.filter(|name| !name.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Please provide a search term (name)" })),
        )
            .into_response();
    };

    let store = state.store.read().await;
    let needle = term.to_lowercase();

    let results: Vec<Product> = store
        .list()
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    Json(SearchResults {
        query: term,
        total: results.len(),
        results,
    })
    .into_response()
}

/// Catalog statistics.
///
/// # Endpoint
///
/// `GET /api/products/stats`
///
/// # Response (200 OK)
///
/// Counts are keyed by lower-cased category and sum to `totalProducts`:
///
/// ```json
/// {
///   "totalProducts": 3,
///   "countByCategory": { "electronics": 2, "kitchen": 1 }
/// }
/// ```
pub async fn product_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    let store = state.store.read().await;

    let mut count_by_category: BTreeMap<String, usize> = BTreeMap::new();
    for product in store.list() {
        *count_by_category
            .entry(product.category.to_lowercase())
            .or_insert(0) += 1;
    }

    Json(CatalogStats {
        total_products: store.list().len(),
        count_by_category,
    })
}

/// Get a specific product by id.
///
/// # Endpoint
///
/// `GET /api/products/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: the product record
/// - **Error (404)**: no product with that id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let store = state.store.read().await;

    let product = store
        .find_by_id(&id)
        .cloned()
        .ok_or(AppError::ProductNotFound)?;

    Ok(Json(product))
}

/// Create a new product.
///
/// # Endpoint
///
/// `POST /api/products`
///
/// # Middleware
///
/// Requires a valid `x-api-key` header; the body has already passed
/// [`crate::middleware::validate::validate_create`], so deserialization
/// cannot fail on missing or mistyped fields.
///
/// # Response (201 Created)
///
/// ```json
/// {
///   "message": "Product created successfully",
///   "product": { "id": "4", ... }
/// }
/// ```
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    let product = store.insert(request);

    (
        StatusCode::CREATED,
        Json(json!({
            "message": "Product created successfully",
            "product": product
        })),
    )
}

/// Update an existing product.
///
/// # Endpoint
///
/// `PUT /api/products/{id}`
///
/// # Semantics
///
/// Shallow merge: fields present in the body overwrite the stored values,
/// fields absent are retained.
///
/// # Response
///
/// - **Success (200 OK)**: `{message, product}` with the merged record
/// - **Error (404)**: no product with that id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut store = state.store.write().await;

    let product = store
        .replace_fields(&id, request)
        .ok_or(AppError::ProductNotFound)?;

    Ok(Json(json!({
        "message": "Product updated successfully",
        "product": product
    })))
}

/// Delete a product.
///
/// # Endpoint
///
/// `DELETE /api/products/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: `{message, deleted}` with the removed record
/// - **Error (404)**: no product with that id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut store = state.store.write().await;

    let deleted = store.remove(&id).ok_or(AppError::ProductNotFound)?;

    Ok(Json(json!({
        "message": "Product deleted successfully",
        "deleted": deleted
    })))
}
