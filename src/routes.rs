//! Router construction.
//!
//! All routes and middleware are wired here so both `main` and the tests
//! can build the full application in-process.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware, state::AppState};

/// Build the application router.
///
/// # Route Groups
///
/// - Public read-only routes: welcome, health, product listing, search,
///   stats, get-by-id. The literal `search` and `stats` segments are
///   distinct routes, so they are never captured by the `{id}` parameter.
/// - Guarded mutation routes: create, update, delete. Each carries its own
///   validation layer (full payload for create, partial for update), and
///   the whole group sits behind the API key check. Layers run outermost
///   first, so the order per request is: API key, then validation, then
///   the handler.
///
/// The request logger and `TraceLayer` wrap everything, including requests
/// that do not match any route.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(handlers::home::welcome))
        .route("/health", get(handlers::health::health_check))
        .route("/api/products", get(handlers::products::list_products))
        .route(
            "/api/products/search",
            get(handlers::products::search_products),
        )
        .route(
            "/api/products/stats",
            get(handlers::products::product_stats),
        )
        .route("/api/products/{id}", get(handlers::products::get_product));

    let create_route = Router::new()
        .route("/api/products", post(handlers::products::create_product))
        .route_layer(axum_middleware::from_fn(
            middleware::validate::validate_create,
        ));

    let update_route = Router::new()
        .route(
            "/api/products/{id}",
            put(handlers::products::update_product),
        )
        .route_layer(axum_middleware::from_fn(
            middleware::validate::validate_update,
        ));

    let delete_route = Router::new().route(
        "/api/products/{id}",
        delete(handlers::products::delete_product),
    );

    // All mutating routes require the API key
    let guarded_routes = create_route
        .merge(update_route)
        .merge(delete_route)
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_api_key,
        ));

    public_routes
        .merge(guarded_routes)
        .layer(axum_middleware::from_fn(middleware::logger::log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
