//! Category CSV writer

use crate::catalog::BookRecord;
use crate::output::OutputResult;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Column header, in file order
pub const CSV_COLUMNS: [&str; 11] = [
    "titre",
    "prix",
    "Dispo",
    "upc",
    "price_incl_tax",
    "price_excl_tax",
    "availability",
    "description",
    "category",
    "review_rating",
    "image_url",
];

/// Latin-1 mojibake left in front of `£` by some decoders
const MOJIBAKE: &str = "Â";

/// One CSV row; field order must match [`CSV_COLUMNS`]
#[derive(Debug, Serialize)]
struct CsvRow {
    titre: String,
    prix: String,
    dispo: String,
    upc: Option<String>,
    price_incl_tax: Option<String>,
    price_excl_tax: Option<String>,
    availability: Option<String>,
    description: Option<String>,
    category: Option<String>,
    review_rating: Option<u8>,
    image_url: Option<String>,
}

impl From<&BookRecord> for CsvRow {
    fn from(record: &BookRecord) -> Self {
        let summary = &record.summary;
        let detail = record.detail.as_ref();
        let field = |value: Option<&String>| value.map(|v| clean_field(v));

        Self {
            titre: clean_field(&summary.title),
            prix: clean_field(&summary.price_display),
            dispo: clean_field(&summary.availability_display),
            upc: field(detail.map(|d| &d.upc)),
            price_incl_tax: field(detail.map(|d| &d.price_incl_tax)),
            price_excl_tax: field(detail.map(|d| &d.price_excl_tax)),
            availability: field(detail.map(|d| &d.availability_count)),
            description: field(detail.map(|d| &d.description)),
            category: field(detail.map(|d| &d.category_label)),
            review_rating: detail.map(|d| d.review_rating.stars()),
            image_url: field(detail.map(|d| &d.image_url)),
        }
    }
}

/// Removes the `Â` artifact from a field
pub fn clean_field(value: &str) -> String {
    value.replace(MOJIBAKE, "")
}

/// File name of a category's CSV; `/` would otherwise open a subdirectory
pub fn csv_file_name(category_name: &str) -> String {
    format!("{}.csv", category_name.replace('/', "_"))
}

/// Writes a category's records to `<category_dir>/<category>.csv`
///
/// The directory is created if needed and an existing file is truncated.
/// Records without detail leave the trailing columns empty.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(OutputError)` - The directory or file could not be written
pub fn write_category_csv(
    category_dir: &Path,
    category_name: &str,
    records: &[BookRecord],
) -> OutputResult<PathBuf> {
    fs::create_dir_all(category_dir)?;
    let path = category_dir.join(csv_file_name(category_name));

    // Header written by hand so an empty category still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;
    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} books to {}", records.len(), path.display());
    Ok(path)
}
