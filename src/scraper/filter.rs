//! Keyword filters applied to categories and products
//!
//! Matching is a case-insensitive substring test. Both filters keep the input
//! order and never deduplicate.

use crate::scraper::types::{Category, Product};

/// Case-insensitive substring test
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Returns the slugs of the categories whose slug contains `keyword`
///
/// # Example
///
/// ```
/// use sneaker_scout::scraper::{matching_categories, Category};
///
/// let categories = vec![Category::from_slug("mens-shoes"), Category::from_slug("womens-bags")];
/// assert_eq!(matching_categories(&categories, "shoe"), vec!["mens-shoes".to_string()]);
/// ```
pub fn matching_categories(categories: &[Category], keyword: &str) -> Vec<String> {
    categories
        .iter()
        .filter(|c| contains_keyword(&c.slug, keyword))
        .map(|c| c.slug.clone())
        .collect()
}

/// Whether `keyword` appears in the product's title, description or category
pub fn product_matches(product: &Product, keyword: &str) -> bool {
    // Category was already filtered upstream; checking it again also keeps
    // products whose own category field differs from the listing slug.
    [&product.title, &product.description, &product.category]
        .iter()
        .any(|field| contains_keyword(field, keyword))
}

/// Keeps the products that mention `keyword`
pub fn filter_products(products: Vec<Product>, keyword: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| product_matches(p, keyword))
        .collect()
}
