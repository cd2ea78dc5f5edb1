//! Caching API client.
//! Checks the cache before each GET and caches raw bodies of successful responses.

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::FetchError;
use crate::models::{LocationArea, LocationAreasPage, Pokemon};

/// API client owning its own response cache.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    cache: Cache,
    base_url: String,
}

impl ApiClient {
    /// Create a client and its cache from configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let cache = Cache::new(config.cache_ttl)?;
        let http = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self::with_parts(http, cache, &config.base_url))
    }

    /// Create a client around an existing HTTP client and cache.
    pub fn with_parts(http: Client, cache: Cache, base_url: &str) -> Self {
        Self {
            http,
            cache,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The cache backing this client.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first page of location areas.
    pub fn first_location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Fetch the raw body at `url`, serving it from the cache when present.
    ///
    /// Only 200 responses are cached. A miss is not an error; only transport
    /// failures and non-success statuses are.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        if let Some(body) = self.cache.get(url).await {
            debug!("Using cached data for {}", url);
            return Ok(body);
        }

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    /// Fetch `url` and decode the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch one page of location areas.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreasPage, FetchError> {
        self.get_json(url).await
    }

    /// Fetch the details of the location area called `name`.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea, FetchError> {
        let url = format!("{}/location-area/{}/", self.base_url, name);
        self.get_json(&url).await
    }

    /// Fetch the details of the Pokemon called `name`.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, FetchError> {
        let url = format!("{}/pokemon/{}/", self.base_url, name);
        self.get_json(&url).await
    }

    /// Tear down the client, stopping the cache reaper.
    pub async fn shutdown(self) {
        self.cache.shutdown().await;
    }
}
