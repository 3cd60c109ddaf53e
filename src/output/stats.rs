//! Per-run statistics

/// Counts collected while the pipeline runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Categories returned by the catalog
    pub categories_listed: usize,

    /// Categories whose slug matched the keyword
    pub categories_matched: usize,

    /// Products fetched across all matched categories
    pub products_fetched: usize,

    /// Products that survived the product filter
    pub products_retained: usize,
}

impl RunStatistics {
    /// Products dropped by the product filter
    pub fn products_discarded(&self) -> usize {
        self.products_fetched.saturating_sub(self.products_retained)
    }

    /// Logs the statistics at info level
    pub fn log(&self) {
        tracing::info!(
            "Categories: {} listed, {} matched",
            self.categories_listed,
            self.categories_matched
        );
        tracing::info!(
            "Products: {} fetched, {} retained, {} discarded",
            self.products_fetched,
            self.products_retained,
            self.products_discarded()
        );
    }
}
