//! CSV export
//!
//! One header row followed by one row per product, always with the same six
//! columns. The output carries no timestamps, so exporting the same products
//! twice yields identical bytes.

use crate::scraper::Product;
use crate::OutputResult;
use csv::{Terminator, WriterBuilder};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Column names, in export order
pub const EXPORT_HEADERS: [&str; 6] = ["Title", "Price", "Category", "Brand", "Rating", "Description"];

/// One exported row, every value already rendered as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub title: String,
    pub price: String,
    pub category: String,
    pub brand: String,
    pub rating: String,
    pub description: String,
}

impl ExportRecord {
    /// Renders a product as an export row
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product
                .price
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            rating: product
                .rating
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            description: clean_description(&product.description),
        }
    }

    /// Cells in `EXPORT_HEADERS` order
    pub fn as_row(&self) -> [&str; 6] {
        [
            self.title.as_str(),
            self.price.as_str(),
            self.category.as_str(),
            self.brand.as_str(),
            self.rating.as_str(),
            self.description.as_str(),
        ]
    }
}

/// Replaces each newline with a space and trims the ends
pub fn clean_description(description: &str) -> String {
    description.replace('\n', " ").trim().to_string()
}

/// Writes the header and one row per product to `writer`
///
/// # Returns
///
/// * `Ok(usize)` - Number of data rows written
/// * `Err(OutputError)` - The writer failed
pub fn write_products<W: Write>(products: &[Product], writer: W) -> OutputResult<usize> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(EXPORT_HEADERS)?;

    for product in products {
        let record = ExportRecord::from_product(product);
        wtr.write_record(record.as_row())?;
    }

    wtr.flush()?;
    Ok(products.len())
}

/// Writes the products to a CSV file, creating parent directories as needed
///
/// An existing file at `output_path` is overwritten.
///
/// # Arguments
///
/// * `products` - Products that survived filtering
/// * `output_path` - Destination file
///
/// # Returns
///
/// * `Ok(usize)` - Number of data rows written
/// * `Err(OutputError)` - Directory creation or writing failed
pub fn write_products_csv(products: &[Product], output_path: &Path) -> OutputResult<usize> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let rows = write_products(products, file)?;

    tracing::info!("Wrote {} rows to {}", rows, output_path.display());
    Ok(rows)
}
