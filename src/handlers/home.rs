//! Welcome route.

/// Static greeting pointing clients at the product listing.
pub async fn welcome() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}
