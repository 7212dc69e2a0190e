//! Error types for the feed pipeline
//!
//! - `FeedError`: fetching a collection from the portal backend
//! - `DomainError`: rejected local input
//! - `ConfigError`: invalid environment configuration

use thiserror::Error;

/// Errors raised while fetching a collection
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Response for {collection} is missing the `{field}` array")]
    MissingField {
        collection: String,
        field: &'static str,
    },
}

impl FeedError {
    /// Short reason suitable for a user-facing placeholder
    pub fn reason(&self) -> String {
        match self {
            FeedError::Request(e) if e.is_timeout() => "the server took too long to respond".into(),
            FeedError::Request(_) => "the server could not be reached".into(),
            FeedError::Api { status, .. } => format!("the server answered with status {}", status),
            FeedError::Deserialization(_) | FeedError::MissingField { .. } => {
                "the server sent an unexpected response".into()
            }
        }
    }
}

/// Domain errors for local interactions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
