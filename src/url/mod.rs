//! URL handling module for Shelf-Scraper
//!
//! The catalog site links pages with relative paths whose depth is fixed by
//! the site layout (`catalogue/category/books/<slug>/page-N.html`). This
//! module turns those relative links into absolute URLs.

mod resolve;

// Re-export main functions
pub use resolve::{
    detail_page_url, image_url, join_root, next_page_url, strip_leading_dots,
    strip_parent_segments, trim_path_segments,
};

/// Path segments between a listing page and the `catalogue/` directory
pub const LISTING_DEPTH: usize = 4;
