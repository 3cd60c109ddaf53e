//! Output module for exporting scrape results
//!
//! This module handles:
//! - Writing the filtered products to a CSV file
//! - Recording run statistics

mod export;
pub mod stats;

pub use export::{
    clean_description, write_products, write_products_csv, ExportRecord, EXPORT_HEADERS,
};
pub use stats::RunStatistics;
