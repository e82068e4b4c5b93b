//! Pagination controller
//!
//! Walks the location-area listing forwards and backwards, consulting the
//! cache before every fetch and populating it after every successful one.

use std::future::Future;

use tracing::debug;

use crate::api::PokeApiClient;
use crate::cache::Cache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage};

/// Cursor over the paginated location-area listing.
#[derive(Debug)]
pub struct Pager {
    client: PokeApiClient,
    pages: Cache<LocationAreaPage>,
    areas: Cache<LocationArea>,
    next: Option<String>,
    previous: Option<String>,
}

impl Pager {
    /// Creates a pager positioned before the first page.
    pub fn new(
        client: PokeApiClient,
        pages: Cache<LocationAreaPage>,
        areas: Cache<LocationArea>,
        page_size: u32,
    ) -> Self {
        let first = client.first_page_url(page_size);
        Self {
            client,
            pages,
            areas,
            next: Some(first),
            previous: None,
        }
    }

    /// URL `next_page` will load, if any.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// URL `previous_page` will load, if any.
    pub fn previous_url(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Loads the following page and moves the cursor onto it.
    pub async fn next_page(&mut self) -> Result<LocationAreaPage> {
        let url = self.next.clone().ok_or(PokedexError::NoNextPage)?;
        let page = self.load_page(&url).await?;
        self.move_to(&page);
        Ok(page)
    }

    /// Loads the preceding page and moves the cursor onto it.
    pub async fn previous_page(&mut self) -> Result<LocationAreaPage> {
        let url = self.previous.clone().ok_or(PokedexError::NoPreviousPage)?;
        let page = self.load_page(&url).await?;
        self.move_to(&page);
        Ok(page)
    }

    /// Loads the detail of a single location area.
    pub async fn explore(&self, area: &str) -> Result<LocationArea> {
        let url = self.client.area_url(area);
        load_through(&self.areas, &url, || self.client.fetch_area(&url)).await
    }

    async fn load_page(&self, url: &str) -> Result<LocationAreaPage> {
        load_through(&self.pages, url, || self.client.fetch_page(url)).await
    }

    // The page's own links are authoritative; a failed load never gets here,
    // so the cursor only moves on success.
    fn move_to(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }
}

/// Returns the cached value for `url`, fetching and caching it on a miss.
async fn load_through<V, F, Fut>(cache: &Cache<V>, url: &str, fetch: F) -> Result<V>
where
    V: Clone + Send + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V>>,
{
    if let Some(hit) = cache.get(url) {
        debug!(url, "Cache hit");
        return Ok(hit);
    }

    debug!(url, "Cache miss");
    let value = fetch().await?;
    cache.put(url, value.clone());
    Ok(value)
}
