//! Run statistics
//!
//! The orchestrator returns a [`RunSummary`] instead of accumulating books in
//! shared state; this module also renders it for the console.

use crate::catalog::BookRecord;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Counters for one category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryReport {
    /// Category name from the sidebar
    pub name: String,

    /// Listing pages fetched successfully
    pub pages_visited: usize,

    /// Rows written to the CSV
    pub books: usize,

    /// Books whose detail page could not be extracted
    pub details_absent: usize,

    /// Cards dropped for lacking a title or link
    pub cards_skipped: usize,

    /// Covers written to disk
    pub images_saved: usize,

    /// Covers whose download failed
    pub images_failed: usize,

    /// CSV file written for this category
    pub csv_path: Option<PathBuf>,
}

impl CategoryReport {
    /// Creates an empty report for a category
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Every book of the run, in category then listing order
    pub records: Vec<BookRecord>,

    /// One report per processed category, in processing order
    pub categories: Vec<CategoryReport>,
}

impl RunSummary {
    /// Starts an empty summary stamped with the current time
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            records: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Appends one category's results
    pub fn add_category(&mut self, report: CategoryReport, records: Vec<BookRecord>) {
        self.categories.push(report);
        self.records.extend(records);
    }

    /// Stamps the finish time
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Total number of books across categories
    pub fn total_books(&self) -> usize {
        self.records.len()
    }

    /// Books that were written without detail fields
    pub fn total_details_absent(&self) -> usize {
        self.categories.iter().map(|c| c.details_absent).sum()
    }

    /// Covers saved across categories
    pub fn total_images_saved(&self) -> usize {
        self.categories.iter().map(|c| c.images_saved).sum()
    }

    /// Cover downloads that failed across categories
    pub fn total_images_failed(&self) -> usize {
        self.categories.iter().map(|c| c.images_failed).sum()
    }

    /// Run duration in seconds, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

/// Prints a run summary to stdout in a formatted manner
pub fn print_run_summary(summary: &RunSummary) {
    println!("=== Scrape Summary ===\n");

    println!(
        "{:<32} {:>6} {:>6} {:>8} {:>8} {:>8}",
        "Category", "Pages", "Books", "Absent", "Images", "Failed"
    );
    for report in &summary.categories {
        println!(
            "{:<32} {:>6} {:>6} {:>8} {:>8} {:>8}",
            report.name,
            report.pages_visited,
            report.books,
            report.details_absent,
            report.images_saved,
            report.images_failed
        );
    }
    println!();

    println!("Categories: {}", summary.categories.len());
    println!(
        "Books: {} ({} without details)",
        summary.total_books(),
        summary.total_details_absent()
    );
    println!(
        "Images: {} saved, {} failed",
        summary.total_images_saved(),
        summary.total_images_failed()
    );
    if let Some(duration) = summary.duration_seconds() {
        println!("Duration: {} seconds", duration);
    }
}
