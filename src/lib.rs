// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod view;

pub use client::{
    HttpTransport, PdfServiceClient, RawResponse, RequestSequencer, RequestToken, Transport,
};
pub use config::{Config, DisplayConfig, ServiceConfig};
pub use error::{ClientError, Result};
pub use models::{IndexResponse, SearchResponse, SearchResult};
pub use utils::Validator;
pub use view::{CardRenderer, IndexOutcome, SearchView};
