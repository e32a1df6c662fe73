use serde::Deserialize;
use std::path::PathBuf;

/// Catalog site scraped when no root URL is configured
pub const DEFAULT_ROOT_URL: &str = "https://books.toscrape.com/";

/// Main configuration structure for Shelf-Scraper
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site root; category, detail and image URLs are derived from it.
    /// Must end with a trailing slash.
    #[serde(rename = "root-url", default = "default_root_url")]
    pub root_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_url: default_root_url(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory under which one folder per category is created
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    /// Whether cover images are downloaded next to the CSV files
    #[serde(rename = "download-images", default = "default_download_images")]
    pub download_images: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            download_images: default_download_images(),
        }
    }
}

fn default_root_url() -> String {
    DEFAULT_ROOT_URL.to_string()
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_download_images() -> bool {
    true
}
