//! Crawler module for page fetching and category traversal
//!
//! This module contains the network-facing half of the scraper:
//! - HTTP fetching without retries
//! - Book detail scraping with absent-on-failure results
//! - Category pagination
//! - Overall run coordination

mod coordinator;
mod detail;
mod fetcher;
mod paginator;

pub use coordinator::{run_scrape, Coordinator};
pub use detail::scrape_book_detail;
pub use fetcher::{build_http_client, decode_html, fetch_url, FetchResult};
pub use paginator::{CategoryOutput, CategoryPaginator};
