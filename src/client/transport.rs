// file: src/client/transport.rs
// description: HTTP transport seam for the PDF service client
// reference: https://docs.rs/reqwest

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Status and undecoded body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POST to `url`, sending `body` as JSON when present.
    async fn post_json(&self, url: &str, body: Option<&Value>) -> Result<RawResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: Option<&Value>) -> Result<RawResponse> {
        let mut request = self.client.post(url);
        if let Some(body) = body {
            // sets Content-Type: application/json
            request = request.json(body);
        }

        debug!("POST {}", url);

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("POST {} -> {} ({} bytes)", url, status, body.len());

        Ok(RawResponse { status, body })
    }
}
