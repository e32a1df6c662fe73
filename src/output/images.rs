//! Cover image downloader

use crate::crawler::{fetch_url, FetchResult};
use crate::output::OutputResult;
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory of a category folder holding its covers
pub const IMAGE_DIR: &str = "book_images";

/// Characters replaced by `_` in image file names
const UNSAFE_CHARS: [char; 11] = [':', '#', '/', '\\', '*', '?', '"', '<', '>', '|', ' '];

/// Maximum length of the file stem, in characters
const MAX_STEM_CHARS: usize = 50;

/// Outcome of a single cover download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// The image was written to this path
    Saved(PathBuf),

    /// The fetch failed; nothing was written
    Failed(String),
}

/// Derives a filesystem-safe `.jpg` file name from a book title
///
/// Unsafe characters and spaces become `_`, the result is lowercased and
/// cut to 50 characters. Distinct titles may collide; the later download
/// overwrites the earlier one.
///
/// # Examples
///
/// ```
/// use shelf_scraper::output::image_file_name;
///
/// assert_eq!(image_file_name("Sharp Objects"), "sharp_objects.jpg");
/// ```
pub fn image_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
        .chars()
        .take(MAX_STEM_CHARS)
        .collect();
    format!("{}.jpg", stem)
}

/// Downloads a book cover into `<category_dir>/book_images/`
///
/// Best effort: a failed fetch is logged and reported as
/// [`ImageOutcome::Failed`]. Only filesystem errors are returned as `Err`.
/// The content type is not checked against the `.jpg` extension.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `image_url` - Absolute URL of the cover
/// * `title` - Book title the file name is derived from
/// * `category_dir` - The category's output directory
pub async fn download_image(
    client: &Client,
    image_url: &str,
    title: &str,
    category_dir: &Path,
) -> OutputResult<ImageOutcome> {
    tracing::info!("Downloading cover for: {}", title);

    let image_dir = category_dir.join(IMAGE_DIR);
    fs::create_dir_all(&image_dir)?;
    let path = image_dir.join(image_file_name(title));

    match fetch_url(client, image_url).await {
        FetchResult::Success { body, .. } => {
            fs::write(&path, &body)?;
            tracing::info!("Cover saved for: {}", title);
            Ok(ImageOutcome::Saved(path))
        }
        failure => {
            tracing::error!(
                "Failed to download cover for {} ({}): {}",
                title,
                image_url,
                failure
            );
            Ok(ImageOutcome::Failed(failure.to_string()))
        }
    }
}
