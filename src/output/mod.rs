//! Output module for writing scrape results
//!
//! This module handles:
//! - Writing one CSV file per category
//! - Downloading cover images next to the CSV
//! - Summarising a run for the console

mod csv_writer;
mod images;
pub mod stats;

pub use csv_writer::{clean_field, csv_file_name, write_category_csv, CSV_COLUMNS};
pub use images::{download_image, image_file_name, ImageOutcome, IMAGE_DIR};
pub use stats::{print_run_summary, CategoryReport, RunSummary};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
