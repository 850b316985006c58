//! Frontend Models
//!
//! Data structures matching backend JSON payloads.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Amounts arrive either as JSON numbers or as decimal strings ("12.50")
fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

/// One line of the cart sidebar (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(deserialize_with = "de_amount")]
    pub price: f64,
    pub qty: u32,
    #[serde(deserialize_with = "de_amount")]
    pub total: f64,
}

/// Body of `/add-to-cart/` and `/update-cart/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub cart_count: u32,
    #[serde(default)]
    pub cart_items: Vec<CartLine>,
    #[serde(default, deserialize_with = "de_amount")]
    pub grand_total: f64,
    #[serde(default)]
    pub message: Option<String>,
}

impl CartResponse {
    /// Turn a decoded body into a snapshot, treating `success: false` as an
    /// application failure.
    pub fn into_snapshot(self) -> Result<CartSnapshot, ApiError> {
        if !self.success {
            return Err(ApiError::Application(self.message.unwrap_or_default()));
        }
        Ok(CartSnapshot {
            count: self.cart_count,
            items: self.cart_items,
            grand_total: self.grand_total,
        })
    }
}

/// Server-provided cart state; rebuilt on every response, never persisted
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartSnapshot {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default, deserialize_with = "de_amount")]
    pub grand_total: f64,
}

impl CartSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A single instant-search match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    /// Already formatted by the server
    pub price: String,
    pub url: String,
}

/// Body of `/instant-search/`
///
/// The canonical shape is `{results: [...]}`; older pages answer with a bare
/// array, which is still accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Wrapped { results: Vec<SearchHit> },
    Bare(Vec<SearchHit>),
}

impl SearchResponse {
    pub fn into_hits(self) -> Vec<SearchHit> {
        match self {
            SearchResponse::Wrapped { results } => results,
            SearchResponse::Bare(hits) => hits,
        }
    }
}

/// Product card rendered in the catalog grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Slug used in product and cart URLs
    pub id: String,
    pub title: String,
    #[serde(deserialize_with = "de_amount")]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Product {
    /// Product page, defaulting to the slug route
    pub fn detail_url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| format!("/producto/{}/", self.id))
    }
}

/// A selectable category or brand in the filter panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub categories: Vec<FilterOption>,
    #[serde(default)]
    pub brands: Vec<FilterOption>,
}

/// A product row on the dashboard sync tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncProduct {
    pub id: u32,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_response_accepts_string_amounts() {
        let body = r#"{
            "success": true,
            "cart_count": 3,
            "cart_items": [
                {"title": "Taladro", "image": "/m/t.jpg", "price": "499.50", "qty": 2, "total": "999.00"},
                {"title": "Broca", "price": 12.5, "qty": 1, "total": 12.5}
            ],
            "grand_total": "1011.50"
        }"#;
        let snapshot = serde_json::from_str::<CartResponse>(body)
            .unwrap()
            .into_snapshot()
            .unwrap();

        assert_eq!(snapshot.count, 3);
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.items[0].price, 499.5);
        assert_eq!(snapshot.items[1].image, None);
        assert_eq!(snapshot.grand_total, 1011.5);
    }

    #[test]
    fn test_unsuccessful_cart_response_is_application_error() {
        let body = r#"{"success": false, "message": "Producto no disponible"}"#;
        let err = serde_json::from_str::<CartResponse>(body)
            .unwrap()
            .into_snapshot()
            .unwrap_err();
        assert_eq!(err, ApiError::Application("Producto no disponible".into()));
    }

    #[test]
    fn test_missing_success_flag_is_failure() {
        let body = r#"{"cart_count": 1}"#;
        let resp: CartResponse = serde_json::from_str(body).unwrap();
        assert!(resp.into_snapshot().is_err());
    }

    #[test]
    fn test_search_response_both_shapes() {
        let wrapped = r#"{"results": [{"name": "Pinza", "price": "$89.00", "url": "/producto/pinza/"}]}"#;
        let bare = r#"[{"name": "Pinza", "price": "$89.00", "url": "/producto/pinza/"}]"#;

        let a = serde_json::from_str::<SearchResponse>(wrapped).unwrap().into_hits();
        let b = serde_json::from_str::<SearchResponse>(bare).unwrap().into_hits();
        assert_eq!(a, b);
        assert_eq!(a[0].url, "/producto/pinza/");
    }

    #[test]
    fn test_product_detail_url() {
        let mut product: Product =
            serde_json::from_str(r#"{"id": "sierra-caladora", "title": "Sierra", "price": 1299}"#).unwrap();
        assert_eq!(product.detail_url(), "/producto/sierra-caladora/");
        product.url = Some("/p/42/".into());
        assert_eq!(product.detail_url(), "/p/42/");
    }

    #[test]
    fn test_bad_amount_is_rejected() {
        let body = r#"{"title": "X", "price": "abc", "qty": 1, "total": 1}"#;
        assert!(serde_json::from_str::<CartLine>(body).is_err());
    }
}
