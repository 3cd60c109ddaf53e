//! Scraper module for catalog fetching and filtering
//!
//! This module contains the core scraping logic, including:
//! - Catalog record types and their lenient decoding
//! - HTTP fetching of categories and products
//! - Keyword filtering of categories and products
//! - Overall pipeline coordination

mod coordinator;
mod fetcher;
mod filter;
mod types;

pub use coordinator::{fetch_products, run_scrape, Coordinator, ScrapeOutcome};
pub use fetcher::{build_http_client, CatalogClient};
pub use filter::{contains_keyword, filter_products, matching_categories, product_matches};
pub use types::{Category, Product, ProductPage, Scalar};
