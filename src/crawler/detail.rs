//! Book detail scraper

use crate::catalog::{extract_detail, AbsenceReason, DetailOutcome};
use crate::crawler::fetcher::{decode_html, fetch_url, FetchResult};
use reqwest::Client;
use url::Url;

/// Fetches and extracts one book's detail page
///
/// Never fails: transport errors, missing elements and unknown rating words
/// all become [`DetailOutcome::Absent`] with the reason logged.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - Absolute URL of the detail page
/// * `root` - Site root used to resolve the cover image
pub async fn scrape_book_detail(client: &Client, url: &str, root: &Url) -> DetailOutcome {
    tracing::debug!("Fetching book details: {}", url);

    let result = match fetch_url(client, url).await {
        FetchResult::Success { body, .. } => {
            extract_detail(&decode_html(&body), root)
        }
        FetchResult::HttpError { status_code } => Err(AbsenceReason::HttpStatus { status_code }),
        FetchResult::NetworkError { error } => Err(AbsenceReason::Network(error)),
    };

    match result {
        Ok(detail) => {
            tracing::debug!("Cover URL for {}: {}", url, detail.image_url);
            DetailOutcome::Detail(detail)
        }
        Err(reason) => {
            tracing::warn!("No details for {}: {}", url, reason);
            DetailOutcome::Absent(reason)
        }
    }
}
