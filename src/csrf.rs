//! CSRF Token Lookup
//!
//! The backend rejects unsafe requests without a token. The token comes
//! from the `csrftoken` cookie, falling back to the value the page embedded
//! in its config.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Form field name for plain HTML form posts
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Find a cookie value in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

/// Pick the token: cookie first, then the page value
pub fn resolve_token(cookies: Option<&str>, page_token: Option<&str>) -> Option<String> {
    cookies
        .and_then(|c| cookie_value(c, CSRF_COOKIE))
        .or_else(|| page_token.filter(|t| !t.is_empty()).map(str::to_string))
}

/// Read `document.cookie` from the live page
fn document_cookies() -> Option<String> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|doc| doc.cookie().ok())
}

/// Token for the current request
pub fn current_token(page_token: Option<&str>) -> Option<String> {
    resolve_token(document_cookies().as_deref(), page_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=xyz; csrftoken=Tk9%2Babc; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("Tk9+abc"));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        assert_eq!(cookie_value("xcsrftoken=nope", "csrftoken"), None);
    }

    #[test]
    fn test_cookie_wins_over_page_value() {
        let token = resolve_token(Some("csrftoken=from-cookie"), Some("from-page"));
        assert_eq!(token.as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_page_value_used_without_cookie() {
        assert_eq!(resolve_token(Some("a=b"), Some("from-page")).as_deref(), Some("from-page"));
        assert_eq!(resolve_token(None, Some("from-page")).as_deref(), Some("from-page"));
        assert_eq!(resolve_token(Some("csrftoken="), None), None);
        assert_eq!(resolve_token(None, Some("")), None);
    }
}
