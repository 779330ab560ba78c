use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::models::cache::Cache;
use crate::models::location::{LocationArea, LocationAreaPage};
use crate::models::pokemon::Pokemon;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

pub struct PokeApi {
    client: Client,
    base_url: String,
    cache: Arc<Cache>,
}

impl PokeApi {
    pub fn new(cache: Arc<Cache>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, cache)
    }

    pub fn with_base_url(base_url: impl Into<String>, cache: Arc<Cache>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            client: Client::new(),
            base_url,
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the `location-area` listing, used as the first page.
    pub fn location_area_list_url(&self) -> String {
        format!("{}location-area/", self.base_url)
    }

    /// Returns the raw body for `url`, from the cache when present.
    pub async fn get_with_cache(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!("Cache hit for {}", url);
            return Ok(body);
        }

        debug!("Cache miss for {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone());
        Ok(body)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_with_cache(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches one listing page. `page_url` is a full URL as handed out in a
    /// page's `next`/`previous` links, or `None` for the first page.
    pub async fn location_area_page(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        match page_url {
            Some(url) => self.get_json(url).await,
            None => self.get_json(&self.location_area_list_url()).await,
        }
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}location-area/{}", self.base_url, name);
        self.get_json(&url).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}pokemon/{}", self.base_url, name);
        self.get_json(&url).await
    }
}
