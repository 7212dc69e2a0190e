//! Mock implementations of port traits
//!
//! In-memory implementations that tests configure up front and can change
//! between calls.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Collection, FeedItem};
use crate::domain::ports::{Clock, FeedSource};
use crate::error::FeedError;

// ============================================================================
// In-Memory Feed Source
// ============================================================================

/// Serves preset collections; collections that were never set answer 404
#[derive(Default)]
pub struct InMemoryFeedSource {
    responses: Arc<RwLock<HashMap<Collection, Result<Vec<FeedItem>, u16>>>>,
    fetches: AtomicUsize,
}

impl InMemoryFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(self, collection: Collection, items: Vec<FeedItem>) -> Self {
        self.set_items(collection, items);
        self
    }

    /// Make fetches of `collection` fail with the given HTTP status
    pub fn with_failure(self, collection: Collection, status: u16) -> Self {
        self.set_failure(collection, status);
        self
    }

    pub fn set_items(&self, collection: Collection, items: Vec<FeedItem>) {
        self.responses
            .write()
            .unwrap()
            .insert(collection, Ok(items));
    }

    pub fn set_failure(&self, collection: Collection, status: u16) {
        self.responses
            .write()
            .unwrap()
            .insert(collection, Err(status));
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for InMemoryFeedSource {
    async fn fetch(&self, collection: Collection) -> Result<Vec<FeedItem>, FeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let responses = self.responses.read().unwrap();
        match responses.get(&collection) {
            Some(Ok(items)) => Ok(items.clone()),
            Some(Err(status)) => Err(FeedError::Api {
                status: *status,
                message: "mock failure".to_string(),
            }),
            None => Err(FeedError::Api {
                status: 404,
                message: format!("no {} configured", collection),
            }),
        }
    }
}

// ============================================================================
// Fixed Clock
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
