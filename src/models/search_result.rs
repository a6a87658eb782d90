// file: src/models/search_result.rs
// description: Search result model returned by the PDF search endpoint

use serde::{Deserialize, Serialize};

/// One matched passage from the indexed PDF corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document the passage came from, usually a PDF file name
    pub source: String,

    /// Matched passage text
    pub content: String,
}

impl SearchResult {
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }
}
