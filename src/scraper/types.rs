//! Catalog records as they arrive from the API
//!
//! The API is loosely typed: fields go missing, come back as `null`, and the
//! categories endpoint has served both objects and bare slug strings. All of
//! that is resolved here so the rest of the crate works with plain values.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use std::fmt;

/// A product category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Short identifier used in API paths (e.g. `mens-shoes`)
    pub slug: String,

    /// Human-readable name (e.g. `Mens Shoes`)
    pub name: String,
}

impl Category {
    /// Creates a category whose display name is its slug
    pub fn from_slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            name: slug.clone(),
            slug,
        }
    }
}

/// Both shapes the categories endpoint has returned over time
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Slug(String),
    Object {
        #[serde(default, deserialize_with = "lenient_text")]
        slug: String,
        #[serde(default, deserialize_with = "lenient_text")]
        name: String,
    },
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawCategory::deserialize(deserializer)? {
            RawCategory::Slug(slug) => Category::from_slug(slug),
            RawCategory::Object { slug, name } => Category { slug, name },
        })
    }
}

/// A loosely typed value: whatever number or string the API sent
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl Scalar {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Scalar::Number(n)),
            Value::String(s) => Some(Scalar::Text(s)),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// A catalog product
///
/// Fields are extracted best-effort. Text fields take any string or number
/// and fall back to the empty string; price and rating keep whatever number
/// or string was sent, so `100` stays `100` and `9.99` stays `9.99` when
/// exported. Anything else (missing, `null`, arrays, objects) is blank.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient_scalar")]
    pub price: Option<Scalar>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: String,

    #[serde(default, deserialize_with = "lenient_scalar")]
    pub rating: Option<Scalar>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
}

/// Response body of the "products in category" endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,

    /// Total matching products on the server side, only used for a warning
    #[serde(default)]
    pub total: Option<Value>,
}

impl ProductPage {
    /// Server-side total, when it is a non-negative integer
    pub fn reported_total(&self) -> Option<u64> {
        self.total.as_ref().and_then(Value::as_u64)
    }
}

/// Treats an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_scalar<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::from_value(Value::deserialize(deserializer)?))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_scalar(deserializer)?
        .map(|s| s.to_string())
        .unwrap_or_default())
}
