// file: src/client/mod.rs
// description: PDF service client module exports
// reference: internal module structure

pub mod pdf_service;
pub mod sequencer;
pub mod transport;

pub use pdf_service::{INDEX_PATH, PdfServiceClient, SEARCH_PATH};
pub use sequencer::{RequestSequencer, RequestToken};
pub use transport::{HttpTransport, RawResponse, Transport};
