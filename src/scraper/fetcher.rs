//! HTTP fetcher for the catalog API
//!
//! This module handles all HTTP requests made during a run:
//! - Building the HTTP client with the configured user agent and deadline
//! - Resolving endpoint URLs against the configured base URL
//! - Listing categories and the products of one category
//! - Error classification (transport, timeout, status, malformed body)
//!
//! Every failure is returned to the caller; there is no retry.

use crate::config::ApiConfig;
use crate::scraper::types::{Category, Product, ProductPage};
use crate::{Result, ScrapeError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The API configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ApiConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Read-only client for the catalog API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a catalog client from the API configuration
    ///
    /// # Returns
    ///
    /// * `Ok(CatalogClient)` - Ready to issue requests
    /// * `Err(ScrapeError)` - The base URL is unusable or the client failed to build
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ScrapeError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ScrapeError::InvalidUrl(config.base_url.clone()));
        }

        let client = build_http_client(config)?;

        Ok(Self { client, base_url })
    }

    /// URL of the category listing endpoint
    pub fn categories_url(&self) -> Result<Url> {
        self.endpoint(&["products", "categories"])
    }

    /// URL listing the products of `slug`
    pub fn category_products_url(&self, slug: &str) -> Result<Url> {
        self.endpoint(&["products", "category", slug])
    }

    /// Lists every category in the catalog
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Category>)` - Categories in the order the API returned them
    /// * `Err(ScrapeError)` - The request failed, returned a non-success
    ///   status, or the body was not a category list
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let url = self.categories_url()?;
        let categories: Vec<Category> = self.get_json(url).await?;

        tracing::debug!("Catalog returned {} categories", categories.len());
        Ok(categories)
    }

    /// Fetches the products of a single category
    ///
    /// A response without a `products` field yields an empty list. Only the
    /// first page the API returns is used.
    pub async fn products_in_category(&self, slug: &str) -> Result<Vec<Product>> {
        let url = self.category_products_url(slug)?;
        let page: ProductPage = self.get_json(url).await?;

        if let Some(total) = page.reported_total() {
            if total > page.products.len() as u64 {
                tracing::warn!(
                    "Category '{}' reports {} products but only {} were returned",
                    slug,
                    total,
                    page.products.len()
                );
            }
        }

        tracing::debug!("Category '{}': {} products", slug, page.products.len());
        Ok(page.products)
    }

    /// Appends path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ScrapeError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues a GET request and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_error(&url, e))?;

        serde_json::from_str(&body).map_err(|e| ScrapeError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Maps a transport error onto the crate error type
fn classify_error(url: &Url, error: reqwest::Error) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScrapeError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
