//! Category paginator
//!
//! Walks one category's listing pages in order. For every card it scrapes
//! the detail page and, when a cover URL is known, downloads the cover
//! before moving on. The CSV is written once pagination ends.

use crate::catalog::{parse_listing_page, BookRecord, Category};
use crate::crawler::detail::scrape_book_detail;
use crate::crawler::fetcher::{decode_html, fetch_url, FetchResult};
use crate::output::{download_image, write_category_csv, CategoryReport, ImageOutcome};
use crate::url::{detail_page_url, next_page_url};
use crate::ShelfError;
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Books and counters produced for one category
#[derive(Debug, Clone)]
pub struct CategoryOutput {
    pub records: Vec<BookRecord>,
    pub report: CategoryReport,
}

/// Scrapes every listing page of a category
pub struct CategoryPaginator<'a> {
    client: &'a Client,
    root: &'a Url,
    output_dir: &'a Path,
    download_images: bool,
}

impl<'a> CategoryPaginator<'a> {
    /// Creates a paginator writing under `output_dir`
    pub fn new(client: &'a Client, root: &'a Url, output_dir: &'a Path, download_images: bool) -> Self {
        Self {
            client,
            root,
            output_dir,
            download_images,
        }
    }

    /// Scrapes a category and writes its CSV
    ///
    /// A failed listing fetch ends pagination; books gathered so far are
    /// still written. Only filesystem errors are returned as `Err`.
    pub async fn scrape(&self, category: &Category) -> Result<CategoryOutput, ShelfError> {
        tracing::info!("Exploring category: {} ({})", category.name, category.listing_url);

        let category_dir = self.output_dir.join(&category.name);
        let mut report = CategoryReport::new(&category.name);
        let mut records = Vec::new();
        let mut next = Some(category.listing_url.clone());

        while let Some(listing_url) = next.take() {
            let body = match fetch_url(self.client, &listing_url).await {
                FetchResult::Success { body, .. } => decode_html(&body),
                failure => {
                    tracing::error!("Failed to fetch listing page {}: {}", listing_url, failure);
                    break;
                }
            };
            report.pages_visited += 1;

            let page = parse_listing_page(&body)?;
            tracing::info!("{} books found on {}", page.cards.len(), listing_url);
            report.cards_skipped += page.skipped;

            for card in page.cards {
                let detail_url = detail_page_url(&listing_url, &card.href);
                tracing::info!("Processing book: {}", card.summary.title);
                tracing::debug!("Book URL: {}", detail_url);

                let outcome = scrape_book_detail(self.client, &detail_url, self.root).await;
                if outcome.is_absent() {
                    report.details_absent += 1;
                }
                let record = BookRecord::merge(card.summary, outcome);

                match record.image_url() {
                    Some(image_url) if self.download_images => {
                        match download_image(self.client, image_url, record.title(), &category_dir)
                            .await?
                        {
                            ImageOutcome::Saved(_) => report.images_saved += 1,
                            ImageOutcome::Failed(_) => report.images_failed += 1,
                        }
                    }
                    Some(_) => {}
                    None => tracing::debug!("No cover URL for: {}", record.title()),
                }

                records.push(record);
            }

            next = page
                .next_href
                .map(|href| next_page_url(&listing_url, &href));
            if next.is_some() {
                tracing::info!("Moving to next page of {}", category.name);
            }
        }

        let csv_path = write_category_csv(&category_dir, &category.name, &records)?;
        report.books = records.len();
        report.csv_path = Some(csv_path);

        Ok(CategoryOutput { records, report })
    }
}
