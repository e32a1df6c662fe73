//! Scrape coordinator - main run orchestration logic
//!
//! This module drives a whole run:
//! - Discovering categories from the site root
//! - Optionally narrowing them to a user-supplied selection
//! - Running the category paginator for each category in turn
//! - Collecting every category's output into a run summary

use crate::catalog::{parse_categories, Category};
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_url};
use crate::crawler::paginator::CategoryPaginator;
use crate::output::RunSummary;
use crate::ShelfError;
use reqwest::Client;
use url::Url;

/// Main scrape coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    root: Url,
    selection: Vec<String>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ShelfError)` - Invalid root URL or HTTP client setup failure
    pub fn new(config: Config) -> Result<Self, ShelfError> {
        let root = Url::parse(&config.site.root_url)?;
        let client = build_http_client()?;

        Ok(Self {
            config,
            client,
            root,
            selection: Vec::new(),
        })
    }

    /// Restricts the run to categories with these names (case-insensitive)
    ///
    /// An empty selection keeps every category.
    pub fn with_selection(mut self, names: Vec<String>) -> Self {
        self.selection = names;
        self
    }

    /// Discovers the site's categories in sidebar order
    ///
    /// A failed root fetch yields an empty list rather than an error.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ShelfError> {
        tracing::info!("Looking up categories on {}", self.root);

        let result = fetch_url(&self.client, self.root.as_str()).await;
        let Some(body) = result.html() else {
            tracing::error!("Failed to fetch site root {}: {}", self.root, result);
            return Ok(Vec::new());
        };

        let categories = parse_categories(&body, &self.root)?;
        tracing::info!("{} categories found", categories.len());

        Ok(self.apply_selection(categories))
    }

    fn apply_selection(&self, categories: Vec<Category>) -> Vec<Category> {
        if self.selection.is_empty() {
            return categories;
        }

        for wanted in &self.selection {
            if !categories.iter().any(|c| c.name.eq_ignore_ascii_case(wanted)) {
                tracing::warn!("Requested category '{}' not found", wanted);
            }
        }

        categories
            .into_iter()
            .filter(|c| {
                self.selection
                    .iter()
                    .any(|wanted| c.name.eq_ignore_ascii_case(wanted))
            })
            .collect()
    }

    /// Runs the whole pipeline
    ///
    /// Categories are processed one after another. A category whose books
    /// all fail still gets a CSV and never stops later categories; only
    /// filesystem errors abort the run.
    pub async fn run(&self) -> Result<RunSummary, ShelfError> {
        let mut summary = RunSummary::start();

        let categories = self.list_categories().await?;
        let paginator = CategoryPaginator::new(
            &self.client,
            &self.root,
            &self.config.output.directory,
            self.config.output.download_images,
        );

        for (index, category) in categories.iter().enumerate() {
            tracing::info!(
                "Category {}/{}: {}",
                index + 1,
                categories.len(),
                category.name
            );
            let output = paginator.scrape(category).await?;
            summary.add_category(output.report, output.records);
        }

        summary.finish();
        tracing::info!("Scrape finished: {} books collected", summary.total_books());

        Ok(summary)
    }
}

/// Runs a complete scrape with every category of the site
///
/// # Example
///
/// ```no_run
/// use shelf_scraper::config::Config;
/// use shelf_scraper::crawler::run_scrape;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_scrape(Config::default()).await?;
/// println!("{} books", summary.total_books());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: Config) -> Result<RunSummary, ShelfError> {
    Coordinator::new(config)?.run().await
}
