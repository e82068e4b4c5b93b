//! PokeAPI HTTP client
//!
//! Thin wrapper over `reqwest` for the location-area endpoints. It knows how to
//! build URLs and decode bodies; caching is the pager's job.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::models::{LocationArea, LocationAreaPage};

const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// Client for the PokeAPI location-area endpoints.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self::with_client(http, base_url))
    }

    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url.clone(), config.http_timeout())
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first location-area page.
    pub fn first_page_url(&self, page_size: u32) -> String {
        format!("{}/location-area?offset=0&limit={}", self.base_url, page_size)
    }

    /// URL of a single location area's detail.
    pub fn area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    /// Fetches and decodes one page of the location-area listing.
    pub async fn fetch_page(&self, url: &str) -> Result<LocationAreaPage> {
        self.get_json(url).await
    }

    /// Fetches and decodes a single location area.
    pub async fn fetch_area(&self, url: &str) -> Result<LocationArea> {
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "Fetching from PokeAPI");

        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}
