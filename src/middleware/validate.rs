//! Product payload validation middleware.
//!
//! Applied to the product creation and update routes. The middleware
//! buffers the request body, checks field presence and types against the
//! product schema, then restores the body so the handler's `Json` extractor
//! can deserialize it. Failures propagate [`AppError::Validation`] to the
//! central error layer instead of responding directly.

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use crate::error::AppError;

/// Upper bound on buffered request bodies. Product payloads are tiny;
/// anything larger is not a product.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The five fields every product must carry.
const REQUIRED_FIELDS: [&str; 5] = ["name", "description", "price", "category", "inStock"];

/// String-typed fields, which must be non-empty when present.
const STRING_FIELDS: [&str; 3] = ["name", "description", "category"];

/// Validate the body of a product creation request.
///
/// All five product fields must be present and well-typed.
pub async fn validate_create(request: Request, next: Next) -> Result<Response, AppError> {
    let (request, payload) = buffer_json(request).await?;
    check_product_payload(&payload, true)?;
    Ok(next.run(request).await)
}

/// Validate the body of a product update request.
///
/// The payload may be partial: only the fields present are checked, and
/// only those fields will be merged onto the stored record.
pub async fn validate_update(request: Request, next: Next) -> Result<Response, AppError> {
    let (request, payload) = buffer_json(request).await?;
    check_product_payload(&payload, false)?;
    Ok(next.run(request).await)
}

/// Read the whole request body, parse it as JSON, and rebuild the request
/// with the buffered bytes so downstream extractors still see the body.
async fn buffer_json(request: Request) -> Result<(Request, Value), AppError> {
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?;

    let payload = serde_json::from_slice(&bytes).map_err(|_| AppError::invalid_input())?;

    Ok((Request::from_parts(parts, Body::from(bytes)), payload))
}

/// Check a product payload against the schema.
///
/// With `require_all`, every field in [`REQUIRED_FIELDS`] must be present,
/// non-null, and (for string fields) non-empty. Type checks always apply to
/// whichever fields are present.
fn check_product_payload(payload: &Value, require_all: bool) -> Result<(), AppError> {
    if require_all {
        let complete = REQUIRED_FIELDS.iter().all(|field| match payload.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        });
        if !complete {
            return Err(AppError::Validation(
                "All fields (name, description, price, category, inStock) are required"
                    .to_string(),
            ));
        }
    }

    if payload.get("price").is_some_and(|value| !value.is_number()) {
        return Err(AppError::Validation("Price must be a number".to_string()));
    }

    if payload
        .get("inStock")
        .is_some_and(|value| !value.is_boolean())
    {
        return Err(AppError::Validation(
            "inStock must be a boolean (true/false)".to_string(),
        ));
    }

    for field in STRING_FIELDS {
        let valid_string = |value: &Value| value.as_str().is_some_and(|s| !s.is_empty());
        if payload.get(field).is_some_and(|value| !valid_string(value)) {
            return Err(AppError::Validation(format!(
                "{field} must be a non-empty string"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(result: Result<(), AppError>) -> String {
        result.unwrap_err().to_string()
    }

    fn full_payload() -> Value {
        json!({
            "name": "Desk Lamp",
            "description": "Adjustable LED desk lamp",
            "price": 35.5,
            "category": "furniture",
            "inStock": true
        })
    }

    #[test]
    fn accepts_complete_payload() {
        assert!(check_product_payload(&full_payload(), true).is_ok());
    }

    #[test]
    fn missing_field_fails_with_required_message() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("price");

        assert_eq!(
            message(check_product_payload(&payload, true)),
            "All fields (name, description, price, category, inStock) are required"
        );
    }

    #[test]
    fn empty_name_counts_as_missing() {
        let mut payload = full_payload();
        payload["name"] = json!("");

        assert_eq!(
            message(check_product_payload(&payload, true)),
            "All fields (name, description, price, category, inStock) are required"
        );
    }

    #[test]
    fn non_numeric_price_fails() {
        let mut payload = full_payload();
        payload["price"] = json!("35.5");

        assert_eq!(
            message(check_product_payload(&payload, true)),
            "Price must be a number"
        );
    }

    #[test]
    fn non_boolean_in_stock_fails() {
        let mut payload = full_payload();
        payload["inStock"] = json!("yes");

        assert_eq!(
            message(check_product_payload(&payload, true)),
            "inStock must be a boolean (true/false)"
        );
    }

    #[test]
    fn false_in_stock_is_present() {
        let mut payload = full_payload();
        payload["inStock"] = json!(false);

        assert!(check_product_payload(&payload, true).is_ok());
    }

    #[test]
    fn partial_update_payload_is_accepted() {
        assert!(check_product_payload(&json!({ "price": 12.0 }), false).is_ok());
        assert!(check_product_payload(&json!({}), false).is_ok());
    }

    #[test]
    fn partial_update_still_type_checks_present_fields() {
        assert_eq!(
            message(check_product_payload(&json!({ "price": "cheap" }), false)),
            "Price must be a number"
        );
        assert_eq!(
            message(check_product_payload(&json!({ "name": 42 }), false)),
            "name must be a non-empty string"
        );
    }
}
