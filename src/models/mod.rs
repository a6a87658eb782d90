// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod envelope;
pub mod search_result;

pub use envelope::{IndexResponse, SearchResponse};
pub use search_result::SearchResult;
