//! Sneaker-Scout main entry point
//!
//! This is the command-line interface for the Sneaker-Scout catalog scraper.

use clap::Parser;
use std::path::PathBuf;
use sneaker_scout::config::{load_config, validate, Config};
use sneaker_scout::scraper::run_scrape;
use tracing_subscriber::EnvFilter;

/// Sneaker-Scout: a footwear catalog scraper
///
/// Sneaker-Scout lists the categories of the DummyJSON product catalog,
/// fetches the products of every footwear category, keeps the items that
/// mention shoes and saves them to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "sneaker-scout")]
#[command(version = "1.0.0")]
#[command(about = "Scrapes footwear products from a catalog API into CSV", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the CSV export to this path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Keyword matched against category slugs and product text
    #[arg(short, long, value_name = "WORD")]
    keyword: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let keyword = config.filter.keyword.clone();

    match run_scrape(config).await {
        Ok(outcome) => {
            println!("{}", outcome.summary(&keyword));
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sneaker_scout=warn,warn"),
            1 => EnvFilter::new("sneaker_scout=info,warn"),
            2 => EnvFilter::new("sneaker_scout=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if one was given, then applies command-line overrides
fn build_config(cli: &Cli) -> Result<Config, sneaker_scout::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.csv_path = output.to_string_lossy().into_owned();
    }

    if let Some(keyword) = &cli.keyword {
        config.filter.keyword = keyword.clone();
    }

    validate(&config)?;
    Ok(config)
}
