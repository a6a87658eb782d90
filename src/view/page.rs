// file: src/view/page.rs
// description: search page state driven by the PDF service client

use super::cards::CardRenderer;
use crate::client::{PdfServiceClient, Transport};
use crate::models::SearchResult;
use crate::utils::Validator;
use crate::utils::logging::{format_error, format_info, format_success};
use tracing::debug;

pub const INDEXING_STATUS: &str = "Indexing PDFs...";
pub const INDEXED_STATUS: &str = "Indexing completed successfully!";
const SEARCH_FALLBACK_ERROR: &str = "Unknown error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    Pending,
    Succeeded,
    Failed,
}

/// State of the search page: the current query, the last result list, and
/// the status line of the most recent indexing run.
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub is_searching: bool,
    pub search_error: Option<String>,
    pub index_status: Option<String>,
    pub index_outcome: Option<IndexOutcome>,
}

impl SearchView {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Blank queries are refused here, before the client is involved.
    pub async fn handle_search<T: Transport>(&mut self, client: &PdfServiceClient<T>) {
        if let Err(e) = Validator::validate_query_not_blank(&self.query) {
            debug!("Skipping search: {}", e);
            self.search_error = Some("Please enter a search query".to_string());
            return;
        }

        self.is_searching = true;
        self.search_error = None;

        let response = client.search_pdfs(&self.query).await;

        if response.success {
            self.results = response.into_results();
        } else {
            self.search_error = Some(
                response
                    .error
                    .unwrap_or_else(|| SEARCH_FALLBACK_ERROR.to_string()),
            );
        }

        self.is_searching = false;
    }

    pub async fn handle_index<T: Transport>(&mut self, client: &PdfServiceClient<T>) {
        self.index_status = Some(INDEXING_STATUS.to_string());
        self.index_outcome = Some(IndexOutcome::Pending);

        let response = client.index_pdfs().await;

        if response.success {
            self.index_status = Some(INDEXED_STATUS.to_string());
            self.index_outcome = Some(IndexOutcome::Succeeded);
        } else {
            self.index_status = Some(format!(
                "Error: {}",
                response.error.unwrap_or_default()
            ));
            self.index_outcome = Some(IndexOutcome::Failed);
        }
    }

    pub fn render(&self, renderer: &CardRenderer) -> String {
        if self.is_searching {
            return format_info("Searching...");
        }

        if let Some(err) = &self.search_error {
            return format_error(&format!("Error: {}", err));
        }

        if self.results.is_empty() {
            if self.query.is_empty() {
                return String::new();
            }
            return format_info("No results found");
        }

        renderer.render_results(&self.results)
    }

    pub fn render_index_status(&self) -> Option<String> {
        let status = self.index_status.as_deref()?;
        Some(match self.index_outcome {
            Some(IndexOutcome::Succeeded) => format_success(status),
            Some(IndexOutcome::Failed) => format_error(status),
            _ => format_info(status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RawResponse;
    use crate::error::{ClientError, Result};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedTransport {
        reply: std::result::Result<RawResponse, String>,
        calls: AtomicUsize,
    }

    impl FixedTransport {
        fn ok(body: &str) -> Self {
            Self {
                reply: Ok(RawResponse::new(200, body)),
                calls: AtomicUsize::new(0),
            }
        }

        fn err(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Transport for FixedTransport {
        async fn post_json(&self, _url: &str, _body: Option<&Value>) -> Result<RawResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().map_err(ClientError::Transport)
        }
    }

    fn client(transport: FixedTransport) -> PdfServiceClient<FixedTransport> {
        PdfServiceClient::with_transport("http://localhost:4000", transport).unwrap()
    }

    #[tokio::test]
    async fn test_blank_query_skips_request() {
        let client = client(FixedTransport::ok(r#"{"success":true,"results":[]}"#));
        let mut view = SearchView::new("   ");

        view.handle_search(&client).await;

        assert_eq!(client.transport().calls.load(Ordering::SeqCst), 0);
        assert_eq!(view.search_error.as_deref(), Some("Please enter a search query"));
        assert!(!view.is_searching);
    }

    #[tokio::test]
    async fn test_search_success_replaces_results() {
        let client = client(FixedTransport::ok(
            r#"{"success":true,"results":[{"source":"nabh.pdf","content":"..."}]}"#,
        ));
        let mut view = SearchView::new("fire safety");
        view.results = vec![SearchResult::new("stale.pdf", "old")];

        view.handle_search(&client).await;

        assert_eq!(view.results, vec![SearchResult::new("nabh.pdf", "...")]);
        assert!(view.search_error.is_none());
        assert!(!view.is_searching);
    }

    #[tokio::test]
    async fn test_search_success_without_results_field() {
        let client = client(FixedTransport::ok(r#"{"success":true}"#));
        let mut view = SearchView::new("icu");

        view.handle_search(&client).await;

        assert!(view.results.is_empty());
        assert!(view.search_error.is_none());
    }

    #[tokio::test]
    async fn test_search_failure_sets_error() {
        let client = client(FixedTransport::ok(r#"{"success":false}"#));
        let mut view = SearchView::new("icu");

        view.handle_search(&client).await;

        assert_eq!(view.search_error.as_deref(), Some("Unknown error occurred"));
    }

    #[tokio::test]
    async fn test_index_status_transitions() {
        let ok = client(FixedTransport::ok(r#"{"success":true}"#));
        let mut view = SearchView::default();

        view.handle_index(&ok).await;
        assert_eq!(view.index_status.as_deref(), Some(INDEXED_STATUS));
        assert_eq!(view.index_outcome, Some(IndexOutcome::Succeeded));

        let down = client(FixedTransport::err("connection refused"));
        view.handle_index(&down).await;
        assert!(view.index_status.as_deref().unwrap().starts_with("Error: "));
        assert!(view.index_status.as_deref().unwrap().contains("connection refused"));
        assert_eq!(view.index_outcome, Some(IndexOutcome::Failed));
    }

    #[test]
    fn test_pending_index_status_renders_as_info() {
        colored::control::set_override(false);
        let view = SearchView {
            index_status: Some(INDEXING_STATUS.to_string()),
            index_outcome: Some(IndexOutcome::Pending),
            ..SearchView::default()
        };

        assert_eq!(
            view.render_index_status().as_deref(),
            Some("ℹ Indexing PDFs...")
        );
    }

    #[test]
    fn test_render_states() {
        colored::control::set_override(false);
        let renderer = CardRenderer::default();

        let mut view = SearchView::new("dialysis");
        assert_eq!(view.render(&renderer), "ℹ No results found");

        view.search_error = Some("boom".to_string());
        assert_eq!(view.render(&renderer), "✗ Error: boom");

        view.search_error = None;
        view.results = vec![SearchResult::new("who.pdf", "ventilation")];
        assert!(view.render(&renderer).contains("PDF Result: who.pdf"));

        assert_eq!(SearchView::default().render(&renderer), "");
        assert!(SearchView::default().render_index_status().is_none());
    }
}
