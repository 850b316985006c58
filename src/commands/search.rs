//! Search Commands

use super::{send, Body};
use crate::config::PageConfig;
use crate::error::ApiError;
use crate::models::{SearchHit, SearchResponse};

pub fn parse_search_body(body: &str) -> Result<Vec<SearchHit>, ApiError> {
    Ok(serde_json::from_str::<SearchResponse>(body)?.into_hits())
}

/// Query the instant-search endpoint
pub async fn instant_search(config: &PageConfig, term: &str) -> Result<Vec<SearchHit>, ApiError> {
    let url = config.search_endpoint(term);
    let body = send("GET", &url, Body::Empty, None).await?;
    parse_search_body(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_results() {
        assert!(parse_search_body(r#"{"results": []}"#).unwrap().is_empty());
        assert!(parse_search_body("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(parse_search_body(r#"{"items": []}"#), Err(ApiError::Decode(_))));
    }
}
