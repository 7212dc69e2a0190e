//! HTTP implementation of the feed source

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use super::wire::decode_collection;
use crate::config::PortalConfig;
use crate::domain::entities::{Collection, FeedItem};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Reads collections from the portal backend
#[derive(Clone)]
pub struct HttpFeedSource {
    http: Client,
    base_url: String,
}

impl HttpFeedSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &PortalConfig) -> Result<Self, FeedError> {
        Self::new(&config.api_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}{}", self.base_url, collection.path())
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, FeedError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| FeedError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(FeedError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, collection: Collection) -> Result<Vec<FeedItem>, FeedError> {
        let url = self.collection_url(collection);
        debug!(%collection, %url, "Fetching collection");

        let response = self.http.get(&url).send().await?;
        let body = self.handle_response(response).await?;
        let items = decode_collection(collection, body)?;

        info!(%collection, count = items.len(), "Fetched collection");
        Ok(items)
    }
}
