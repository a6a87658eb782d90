// file: src/view/mod.rs
// description: terminal presentation module exports
// reference: internal module structure

pub mod cards;
pub mod page;

pub use cards::CardRenderer;
pub use page::{IndexOutcome, SearchView};
