use serde::Deserialize;

/// Catalog API the scraper talks to
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Client identification sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36";

/// Per-request deadline in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Keyword matched against category slugs and product text
pub const DEFAULT_KEYWORD: &str = "shoe";

/// Where the export lands, relative to the working directory
pub const DEFAULT_CSV_PATH: &str = "output/sneakers_dummyjson.csv";

/// Main configuration structure for Sneaker-Scout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Remote catalog API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the catalog API, without a trailing path
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Value of the `User-Agent` header
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Keyword filter configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Case-insensitive substring applied to slugs and product fields
    pub keyword: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV export
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
        }
    }
}
