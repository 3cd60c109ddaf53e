//! Configuration module for Sneaker-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; anything left out falls back to the built-in
//! DummyJSON defaults, so running without a config file is the normal case.
//!
//! # Example
//!
//! ```no_run
//! use sneaker_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Filtering on keyword: {}", config.filter.keyword);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ApiConfig, Config, FilterConfig, OutputConfig, DEFAULT_BASE_URL, DEFAULT_CSV_PATH,
    DEFAULT_KEYWORD, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
