// file: src/client/pdf_service.rs
// description: client for the PDF indexing and search endpoints
// reference: https://docs.rs/reqwest

use super::sequencer::RequestSequencer;
use super::transport::{HttpTransport, RawResponse, Transport};
use crate::config::ServiceConfig;
use crate::error::{ClientError, Result};
use crate::models::{IndexResponse, SearchResponse};
use crate::utils::Validator;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info};

pub const INDEX_PATH: &str = "/api/pdf/index";
pub const SEARCH_PATH: &str = "/api/pdf/search";

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// Client for the remote PDF service.
///
/// Both operations always return an envelope. Transport errors, unparseable
/// bodies and bodies of the wrong shape are logged and folded into
/// `success: false` with the error message, never returned as `Err`.
pub struct PdfServiceClient<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl PdfServiceClient<HttpTransport> {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_transport(base_url, HttpTransport::new())
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Self::new(config.base_url.clone())
    }
}

impl<T: Transport> PdfServiceClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Result<Self> {
        let base_url = base_url.into();
        Validator::validate_url(&base_url)?;

        Ok(Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ask the service to (re)index its PDF corpus.
    pub async fn index_pdfs(&self) -> IndexResponse {
        match self.try_index_pdfs().await {
            Ok(response) => {
                info!("Index request finished (success: {})", response.success);
                response
            }
            Err(e) => {
                error!("Error indexing PDFs: {}", e);
                IndexResponse::failure(e.to_string())
            }
        }
    }

    /// Run a free-text query. The query is sent as-is, including empty strings.
    pub async fn search_pdfs(&self, query: &str) -> SearchResponse {
        match self.try_search_pdfs(query).await {
            Ok(response) => {
                info!(
                    "Search returned {} result(s) (success: {})",
                    response.results().len(),
                    response.success
                );
                response
            }
            Err(e) => {
                error!("Error searching PDFs: {}", e);
                SearchResponse::failure(e.to_string())
            }
        }
    }

    /// Like [`search_pdfs`](Self::search_pdfs) but yields `None` when a newer
    /// search was issued on the same sequencer before this one completed.
    pub async fn search_pdfs_sequenced(
        &self,
        sequencer: &RequestSequencer,
        query: &str,
    ) -> Option<SearchResponse> {
        let token = sequencer.issue();
        let response = self.search_pdfs(query).await;

        if sequencer.accept(token) {
            Some(response)
        } else {
            debug!("Dropping stale search response (token {})", token.value());
            None
        }
    }

    async fn try_index_pdfs(&self) -> Result<IndexResponse> {
        let url = Validator::join_url(&self.base_url, INDEX_PATH);
        let raw = self.transport.post_json(&url, None).await?;
        decode_envelope(raw)
    }

    async fn try_search_pdfs(&self, query: &str) -> Result<SearchResponse> {
        let url = Validator::join_url(&self.base_url, SEARCH_PATH);
        let body = serde_json::to_value(SearchRequest { query })?;
        debug!("Searching for {:?}", query);

        let raw = self.transport.post_json(&url, Some(&body)).await?;
        decode_envelope(raw)
    }
}

/// Non-2xx responses that still carry a well-formed envelope are passed
/// through untouched; only undecodable bodies become errors.
fn decode_envelope<R: DeserializeOwned>(raw: RawResponse) -> Result<R> {
    let value: Value = serde_json::from_str(&raw.body).map_err(|e| ClientError::Decode {
        status: raw.status,
        message: e.to_string(),
    })?;

    serde_json::from_value(value).map_err(|e| {
        if raw.is_success() {
            ClientError::InvalidResponse(e.to_string())
        } else {
            ClientError::InvalidResponse(format!("HTTP {}: {}", raw.status, e))
        }
    })
}
