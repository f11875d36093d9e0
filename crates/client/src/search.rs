use serde::Deserialize;

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub slug: String,
    pub title: String,
    pub date: Option<String>,
    pub summary: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ApiClient {
    pub async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        self.get_json("/api/search", &[("q", query.to_string())]).await
    }
}

#[cfg(test)]
mod tests {
    use super::SearchResponse;

    #[test]
    fn results_parse_with_optional_fields() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"results": [{"slug": "hello", "title": "Hello", "tags": ["intro"]}]}"#,
        )
        .unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].tags, vec!["intro".to_string()]);
        assert!(response.results[0].summary.is_none());
    }
}
