//! Feed source port trait
//!
//! Abstracts the portal backend's read endpoints.

use async_trait::async_trait;

use crate::domain::entities::{Collection, FeedItem};
use crate::error::FeedError;

/// Read access to a remote collection
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch every item of a collection, in the order the backend returns them.
    ///
    /// Reads only; calling it again is always safe.
    async fn fetch(&self, collection: Collection) -> Result<Vec<FeedItem>, FeedError>;
}
