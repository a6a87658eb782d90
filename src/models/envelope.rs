// file: src/models/envelope.rs
// description: success/error envelopes returned by the index and search endpoints

use super::SearchResult;
use serde::{Deserialize, Serialize};

const UNKNOWN_ERROR: &str = "Unknown error";

/// Body of `POST /api/pdf/index`.
///
/// A failed request never carries a `results` field, unlike [`SearchResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `POST /api/pdf/search`.
///
/// On failure the client fills `results` with an empty list, so callers that
/// only look at `results` still see a well-formed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn non_empty(message: impl Into<String>) -> String {
    let message = message.into();
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

impl IndexResponse {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(non_empty(message)),
        }
    }
}

impl SearchResponse {
    pub fn succeeded(results: Vec<SearchResult>) -> Self {
        Self {
            success: true,
            results: Some(results),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            results: Some(Vec::new()),
            error: Some(non_empty(message)),
        }
    }

    /// Results as a slice; an absent list reads as empty.
    pub fn results(&self) -> &[SearchResult] {
        self.results.as_deref().unwrap_or(&[])
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        self.results.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_index_failure_has_no_results_field() {
        let value = serde_json::to_value(IndexResponse::failure("connection refused")).unwrap();
        assert_eq!(value, json!({ "success": false, "error": "connection refused" }));
    }

    #[test]
    fn test_search_failure_carries_empty_results() {
        let value = serde_json::to_value(SearchResponse::failure("connection refused")).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "results": [], "error": "connection refused" })
        );
    }

    #[test]
    fn test_failure_message_never_empty() {
        assert_eq!(IndexResponse::failure("").error.as_deref(), Some("Unknown error"));
        assert_eq!(SearchResponse::failure("  ").error.as_deref(), Some("Unknown error"));
    }

    #[test]
    fn test_search_response_tolerates_missing_results() {
        let response: SearchResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(response.results.is_none());
        assert!(response.results().is_empty());
    }

    #[test]
    fn test_search_response_requires_success_flag() {
        let parsed = serde_json::from_str::<SearchResponse>(r#"{"results":[]}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_success_omits_error() {
        let value = serde_json::to_value(SearchResponse::succeeded(vec![SearchResult::new(
            "a.pdf", "x",
        )]))
        .unwrap();
        assert_eq!(
            value,
            json!({ "success": true, "results": [{ "source": "a.pdf", "content": "x" }] })
        );
    }
}
