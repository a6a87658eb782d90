// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{ClientError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }

        let host = url.split_once("://").map(|(_, rest)| rest).unwrap_or("");
        if host.trim_matches('/').is_empty() {
            return Err(ClientError::Validation(format!(
                "URL has no host: {}",
                url
            )));
        }

        Ok(())
    }

    pub fn validate_query_not_blank(query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(ClientError::Validation(
                "Please enter a search query".to_string(),
            ));
        }
        Ok(())
    }

    /// Joins a base address and an absolute endpoint path without doubling slashes.
    pub fn join_url(base: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if max_chars == 0 || text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let cut: String = text.chars().take(max_chars).collect();
            format!("{}...", cut)
        }
    }
}
