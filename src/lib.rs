//! Shelf-Scraper: a book catalog harvester
//!
//! This crate walks a book catalog site category by category, follows every
//! listing page, scrapes each book's detail page and cover image, and writes
//! one CSV file per category.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod html;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Shelf-Scraper operations
///
/// Only configuration and filesystem problems surface through this type.
/// Per-book and per-image failures are downgraded to log lines before they
/// reach the orchestrator.
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTML error: {0}")]
    Html(#[from] html::HtmlError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Shelf-Scraper operations
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{BookDetail, BookRecord, BookSummary, Category, DetailOutcome, Rating};
pub use config::Config;
pub use crawler::{run_scrape, Coordinator};
pub use output::{CategoryReport, RunSummary};
