use reqwest::StatusCode;
use thiserror::Error;

/// Shown when a failure carries no description of its own.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search failed with status {0}")]
    Http(StatusCode),

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl SearchError {
    /// The single-line message rendered in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Http(status) => format!(
                "Search failed: {}",
                status.canonical_reason().unwrap_or(status.as_str())
            ),
            SearchError::Network(desc) | SearchError::Parse(desc) => {
                if desc.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    desc.clone()
                }
            }
        }
    }
}
