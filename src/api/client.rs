//! PokeAPI Client
//!
//! Fetches PokeAPI resources over HTTP, consulting the response cache first.
//! Cache keys are the full request URLs and cached values are the raw
//! response bodies, so decoding is identical on the hit and miss paths.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// HTTP client for the PokeAPI with a read-through response cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: TtlCache,
}

impl PokeApiClient {
    /// Creates a client for `base_url` (no trailing slash) backed by `cache`.
    pub fn new(base_url: impl Into<String>, cache: TtlCache) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, cache)
    }

    /// Creates a client that sends requests through `http`.
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>, cache: TtlCache) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            cache,
        }
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config, cache: TtlCache) -> Self {
        Self::new(config.api_base_url.clone(), cache)
    }

    /// Returns the API base URL requests are built from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the response cache this client reads through.
    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    // == Fetch ==
    /// Returns the body served at `url`, from the cache when possible.
    ///
    /// On a miss the body is fetched and, only if the status is a success,
    /// added to the cache. Failed responses are never cached.
    ///
    /// # Errors
    /// - [`PokedexError::Request`] if the request or body read fails
    /// - [`PokedexError::Status`] for any non-2xx response
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "Cache hit");
            return Ok(body);
        }

        debug!(url, "Cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Request failed");
            return Err(PokedexError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        self.cache.add(url, body.clone());
        Ok(body)
    }

    /// Fetches `url` and decodes the body as JSON.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Location Areas ==
    /// Fetches one page of location areas.
    ///
    /// `page_url` is a `next`/`previous` link from an earlier page; `None`
    /// requests the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.location_areas_url(),
        };
        self.fetch_json(&url).await
    }

    /// Fetches a single location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    // == Pokemon ==
    /// Fetches a Pokemon by name (case-insensitive).
    ///
    /// # Errors
    /// Returns [`PokedexError::PokemonNotFound`] when the API answers 404.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let name = name.to_lowercase();
        match self.fetch_json(&self.pokemon_url(&name)).await {
            Err(PokedexError::Status { status: 404, .. }) => Err(PokedexError::PokemonNotFound(name)),
            other => other,
        }
    }

    fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}/", self.base_url, name)
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}/", self.base_url, name)
    }
}
