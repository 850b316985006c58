//! Backend Requests
//!
//! `fetch` wrappers for the storefront endpoints, organized by domain.

mod cart;
mod search;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

use crate::csrf::CSRF_HEADER;
use crate::error::ApiError;

// Re-export all public items
pub use cart::*;
pub use search::*;

/// Payload of an outgoing request
enum Body {
    Empty,
    Json(String),
    Form(String),
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value))
}

fn network(value: JsValue) -> ApiError {
    ApiError::Network(js_message(&value))
}

/// Issue a request and return the body of a 2xx response
async fn send(method: &str, url: &str, body: Body, csrf_token: Option<&str>) -> Result<String, ApiError> {
    let headers = Headers::new().map_err(network)?;
    headers.set("Accept", "application/json").map_err(network)?;
    headers.set("X-Requested-With", "XMLHttpRequest").map_err(network)?;
    if let Some(token) = csrf_token {
        headers.set(CSRF_HEADER, token).map_err(network)?;
    }

    let init = RequestInit::new();
    init.set_method(method);
    init.set_credentials(RequestCredentials::SameOrigin);
    match &body {
        Body::Empty => {}
        Body::Json(json) => {
            headers.set("Content-Type", "application/json").map_err(network)?;
            init.set_body(&JsValue::from_str(json));
        }
        Body::Form(form) => {
            headers
                .set("Content-Type", "application/x-www-form-urlencoded")
                .map_err(network)?;
            init.set_body(&JsValue::from_str(form));
        }
    }
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &init).map_err(network)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    log::debug!("[HTTP] {} {}", method, url);
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not return a Response".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(|e| ApiError::Decode(js_message(&e)))?)
        .await
        .map_err(|e| ApiError::Decode(js_message(&e)))?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
}
