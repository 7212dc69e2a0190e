//! Placement portal feed core
//!
//! Fetches job postings, notices and interview write-ups from the portal
//! backend, normalizes them for display and renders them as markdown.
//! Uses hexagonal (ports & adapters) architecture: the backend is reached only
//! through the `FeedSource` port.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;

pub use adapters::HttpFeedSource;
pub use app::{
    FeedState, FeedView, ImportanceClassifier, LoadOutcome, MessageBoard, Normalizer,
    PendingLoad, LONG_TEXT_BUDGET, SHORT_LABEL_BUDGET,
};
pub use config::PortalConfig;
pub use domain::entities::{
    Author, Capability, Collection, ComposedMessage, FeedItem, NormalizedDisplayItem,
};
pub use domain::ports::{Clock, FeedSource, SystemClock};
pub use error::{ConfigError, DomainError, FeedError};
pub use feed::{BoardFilter, FeedRenderer};
