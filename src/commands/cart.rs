//! Cart Commands
//!
//! Add and clear requests against the cart endpoints.

use serde::Serialize;

use super::{send, Body};
use crate::config::{form_body, PageConfig};
use crate::csrf;
use crate::error::ApiError;
use crate::models::{CartResponse, CartSnapshot};

#[derive(Serialize)]
struct AddToCartArgs {
    quantity: u32,
}

/// Decode a cart endpoint body
pub fn parse_cart_body(body: &str) -> Result<CartSnapshot, ApiError> {
    serde_json::from_str::<CartResponse>(body)?.into_snapshot()
}

/// Add one unit of `product_id`
pub async fn add_to_cart(config: &PageConfig, product_id: &str) -> Result<CartSnapshot, ApiError> {
    let url = config.add_to_cart_endpoint(product_id);
    let json = serde_json::to_string(&AddToCartArgs { quantity: 1 })?;
    let token = csrf::current_token(config.csrf_token.as_deref());

    let body = send("POST", &url, Body::Json(json), token.as_deref()).await?;
    parse_cart_body(&body)
}

/// Empty the cart
pub async fn clear_cart(config: &PageConfig) -> Result<CartSnapshot, ApiError> {
    let form = form_body(&[("action", "clear")]);
    let token = csrf::current_token(config.csrf_token.as_deref());

    let body = send("POST", &config.update_cart_url, Body::Form(form), token.as_deref()).await?;
    parse_cart_body(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let body = r#"{"success": true, "cart_count": 0, "cart_items": [], "grand_total": 0}"#;
        assert_eq!(parse_cart_body(body).unwrap(), CartSnapshot::empty());
    }

    #[test]
    fn test_parse_failure_kinds() {
        assert!(matches!(
            parse_cart_body(r#"{"success": false, "message": "Sin stock"}"#),
            Err(ApiError::Application(msg)) if msg == "Sin stock"
        ));
        assert!(matches!(parse_cart_body("<html>"), Err(ApiError::Decode(_))));
    }
}
