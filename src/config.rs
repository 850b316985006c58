//! Page Configuration
//!
//! Settings injected by the server-rendered page through the
//! `window.STOREFRONT_CONFIG` global. Every field has a default so a page
//! only declares what differs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::MountError;
use crate::models::{CartSnapshot, FilterOptions, Product, SyncProduct};
use crate::panel::PanelId;

/// Name of the global the page assigns its config to
pub const CONFIG_GLOBAL: &str = "STOREFRONT_CONFIG";

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Which application the page mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Storefront,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub page: PageKind,
    /// Id of the element the app is mounted into
    pub mount_id: String,
    pub log_level: String,
    /// Fallback CSRF token when the cookie is unavailable
    pub csrf_token: Option<String>,
    pub add_to_cart_url: String,
    pub update_cart_url: String,
    pub search_url: String,
    pub catalog_url: String,
    pub sync_url: String,
    pub reset_url: String,
    pub user_name: Option<String>,
    pub initial_cart: CartSnapshot,
    pub products: Vec<Product>,
    pub filters: FilterOptions,
    /// Slide-in panels present on this page
    pub panels: Vec<PanelId>,
    pub sync_products: Vec<SyncProduct>,
    pub history_pages: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page: PageKind::Storefront,
            mount_id: "app".to_string(),
            log_level: "info".to_string(),
            csrf_token: None,
            add_to_cart_url: "/add-to-cart/".to_string(),
            update_cart_url: "/update-cart/".to_string(),
            search_url: "/instant-search/".to_string(),
            catalog_url: "/catalogo/".to_string(),
            sync_url: "/dashboard/sincronizar/".to_string(),
            reset_url: "/dashboard/reset/".to_string(),
            user_name: None,
            initial_cart: CartSnapshot::empty(),
            products: Vec::new(),
            filters: FilterOptions::default(),
            panels: PanelId::ALL.to_vec(),
            sync_products: Vec::new(),
            history_pages: 1,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, MountError> {
        serde_json::from_str(json).map_err(|e| MountError::Config(e.to_string()))
    }

    /// Read the config global. `Ok(None)` when the page did not set one.
    pub fn from_window(window: &web_sys::Window) -> Result<Option<Self>, MountError> {
        let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|_| MountError::Config(format!("cannot read window.{}", CONFIG_GLOBAL)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| MountError::Config(e.to_string()))
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn add_to_cart_endpoint(&self, product_id: &str) -> String {
        format!(
            "{}{}/",
            with_trailing_slash(&self.add_to_cart_url),
            utf8_percent_encode(product_id, COMPONENT)
        )
    }

    pub fn search_endpoint(&self, term: &str) -> String {
        format!("{}?q={}", self.search_url, utf8_percent_encode(term, COMPONENT))
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// Encode `pairs` as an `application/x-www-form-urlencoded` body
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", utf8_percent_encode(k, COMPONENT), utf8_percent_encode(v, COMPONENT)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.panels.len(), 3);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_partial_config() {
        let config = PageConfig::from_json(
            r#"{"page": "dashboard", "csrf_token": "abc", "log_level": "debug", "panels": ["cart"]}"#,
        )
        .unwrap();
        assert_eq!(config.page, PageKind::Dashboard);
        assert_eq!(config.csrf_token.as_deref(), Some("abc"));
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.panels, vec![PanelId::Cart]);
        assert_eq!(config.search_url, "/instant-search/");
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(matches!(
            PageConfig::from_json(r#"{"page": "checkout"}"#),
            Err(MountError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = PageConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_endpoints() {
        let mut config = PageConfig::default();
        assert_eq!(config.add_to_cart_endpoint("taladro-dewalt"), "/add-to-cart/taladro-dewalt/");
        assert_eq!(config.search_endpoint("llave 1/2"), "/instant-search/?q=llave%201%2F2");

        config.add_to_cart_url = "/carrito/agregar".into();
        assert_eq!(config.add_to_cart_endpoint("x"), "/carrito/agregar/x/");
    }

    #[test]
    fn test_form_body() {
        assert_eq!(form_body(&[("action", "clear")]), "action=clear");
        assert_eq!(form_body(&[("q", "a&b"), ("n", "1")]), "q=a%26b&n=1");
    }
}
