use url::{ParseError, Url};

use super::LISTING_DEPTH;

/// Joins a relative link onto the site root
///
/// # Examples
///
/// ```
/// use shelf_scraper::url::join_root;
/// use url::Url;
///
/// let root = Url::parse("https://books.toscrape.com/").unwrap();
/// let url = join_root(&root, "catalogue/category/books/travel_2/index.html").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://books.toscrape.com/catalogue/category/books/travel_2/index.html"
/// );
/// ```
pub fn join_root(root: &Url, href: &str) -> Result<Url, ParseError> {
    root.join(href.trim())
}

/// Removes the last `count` `/`-separated segments from a URL string
///
/// A URL with fewer separators than `count` is returned unchanged.
///
/// # Examples
///
/// ```
/// use shelf_scraper::url::trim_path_segments;
///
/// let url = "https://books.toscrape.com/catalogue/category/books/travel_2/index.html";
/// assert_eq!(trim_path_segments(url, 4), "https://books.toscrape.com/catalogue");
/// assert_eq!(trim_path_segments(url, 1), "https://books.toscrape.com/catalogue/category/books/travel_2");
/// ```
pub fn trim_path_segments(url: &str, count: usize) -> &str {
    url.rsplitn(count + 1, '/').last().unwrap_or(url)
}

/// Removes every `../` occurrence from a relative link
pub fn strip_parent_segments(href: &str) -> String {
    href.replace("../", "")
}

/// Strips any run of leading `.` and `/` characters
///
/// Turns `../../media/cache/ab/cd.jpg` into `media/cache/ab/cd.jpg`.
pub fn strip_leading_dots(src: &str) -> &str {
    src.trim_start_matches(['.', '/'])
}

/// Builds the absolute URL of a book's detail page from a listing card link
///
/// Detail pages live directly under `catalogue/`, four segments above any
/// category listing page.
pub fn detail_page_url(listing_url: &str, href: &str) -> String {
    format!(
        "{}/{}",
        trim_path_segments(listing_url, LISTING_DEPTH),
        strip_parent_segments(href)
    )
}

/// Builds the absolute URL of the next listing page from a pager link
///
/// Pager links are siblings of the current page (`page-2.html`).
pub fn next_page_url(listing_url: &str, href: &str) -> String {
    format!("{}/{}", trim_path_segments(listing_url, 1), href)
}

/// Builds the absolute URL of a cover image from a detail page `src`
pub fn image_url(root: &Url, src: &str) -> Result<Url, ParseError> {
    root.join(strip_leading_dots(src))
}
