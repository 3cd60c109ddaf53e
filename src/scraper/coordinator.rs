//! Scrape coordinator - runs the pipeline end to end
//!
//! The steps run strictly in sequence, each request awaited before the next:
//! - List categories
//! - Keep the categories whose slug mentions the keyword
//! - Fetch the products of every kept category, in order
//! - Re-filter the products on title, description and category
//! - Export the survivors to CSV
//!
//! Any request failure aborts the run before the export file is touched.

use crate::config::Config;
use crate::output::{write_products_csv, RunStatistics};
use crate::scraper::fetcher::CatalogClient;
use crate::scraper::filter::{filter_products, matching_categories};
use crate::scraper::types::Product;
use crate::Result;
use std::path::PathBuf;

/// How a completed run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// No category slug contained the keyword; nothing was written
    NoCategories,

    /// The export file was written
    Saved {
        /// Location of the CSV file
        path: PathBuf,
        /// Counts gathered during the run
        stats: RunStatistics,
    },
}

impl ScrapeOutcome {
    /// Number of rows written to the export, zero when nothing was written
    pub fn saved_count(&self) -> usize {
        match self {
            ScrapeOutcome::NoCategories => 0,
            ScrapeOutcome::Saved { stats, .. } => stats.products_retained,
        }
    }

    /// One-line result shown to the user
    pub fn summary(&self, keyword: &str) -> String {
        match self {
            ScrapeOutcome::NoCategories => format!("No {}-related categories found.", keyword),
            ScrapeOutcome::Saved { path, .. } => format!(
                "Saved {} products to {}",
                self.saved_count(),
                path.display()
            ),
        }
    }
}

/// Main scrape coordinator structure
pub struct Coordinator {
    config: Config,
    client: CatalogClient,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScrapeError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self> {
        let client = CatalogClient::new(&config.api)?;
        Ok(Self { config, client })
    }

    /// Runs the full pipeline once
    ///
    /// # Returns
    ///
    /// * `Ok(ScrapeOutcome::NoCategories)` - No matching category, no file written
    /// * `Ok(ScrapeOutcome::Saved { .. })` - Export written
    /// * `Err(ScrapeError)` - A request or the export failed
    pub async fn run(&self) -> Result<ScrapeOutcome> {
        let keyword = self.config.filter.keyword.as_str();
        let mut stats = RunStatistics::default();

        tracing::info!("Listing categories from {}", self.config.api.base_url);
        let categories = self.client.list_categories().await?;
        stats.categories_listed = categories.len();

        let slugs = matching_categories(&categories, keyword);
        stats.categories_matched = slugs.len();

        if slugs.is_empty() {
            tracing::info!(
                "None of {} categories matched '{}'",
                categories.len(),
                keyword
            );
            return Ok(ScrapeOutcome::NoCategories);
        }

        for category in categories.iter().filter(|c| slugs.contains(&c.slug)) {
            tracing::info!("Matched category '{}' ({})", category.slug, category.name);
        }

        let products = fetch_products(&self.client, &slugs).await?;
        stats.products_fetched = products.len();

        let products = filter_products(products, keyword);
        stats.products_retained = products.len();

        let path = PathBuf::from(&self.config.output.csv_path);
        write_products_csv(&products, &path)?;

        stats.log();
        Ok(ScrapeOutcome::Saved { path, stats })
    }
}

/// Fetches the products of each category in turn and concatenates them
///
/// Order follows `slugs`, then the API's order within each category. The
/// first failure aborts the whole fetch.
pub async fn fetch_products(client: &CatalogClient, slugs: &[String]) -> Result<Vec<Product>> {
    let mut all_products = Vec::new();

    for slug in slugs {
        let products = client.products_in_category(slug).await?;
        tracing::info!("Fetched {} products from '{}'", products.len(), slug);
        all_products.extend(products);
    }

    Ok(all_products)
}

/// Runs the complete pipeline with the given configuration
pub async fn run_scrape(config: Config) -> Result<ScrapeOutcome> {
    Coordinator::new(config)?.run().await
}
