//! Category sidebar parser

use crate::catalog::Category;
use crate::html::{attribute, select_all, text, Document, HtmlError};
use crate::url::join_root;
use url::Url;

/// Extracts category links from the home page sidebar
///
/// The first sidebar link is the "Books" pseudo-category covering the whole
/// catalog and is skipped. Order follows the sidebar. Links without an
/// `href`, or whose `href` cannot be resolved, are dropped with a warning.
///
/// # Arguments
///
/// * `html` - Body of the site root page
/// * `root` - Site root used to resolve relative links
///
/// # Returns
///
/// Categories in sidebar order; empty if the sidebar is missing
pub fn parse_categories(html: &str, root: &Url) -> Result<Vec<Category>, HtmlError> {
    let document = Document::parse(html);

    let Some(sidebar) = document.select_first("div", Some("side_categories"))? else {
        tracing::warn!("No category sidebar found on {}", root);
        return Ok(Vec::new());
    };

    let mut categories = Vec::new();
    for link in select_all(sidebar, "a", None)?.into_iter().skip(1) {
        let name = text(link).trim().to_string();

        let Some(href) = attribute(link, "href") else {
            tracing::warn!("Category '{}' has no link, skipping", name);
            continue;
        };

        match join_root(root, href) {
            Ok(listing_url) => categories.push(Category {
                name,
                listing_url: listing_url.to_string(),
            }),
            Err(e) => tracing::warn!("Category '{}' has invalid link '{}': {}", name, href, e),
        }
    }

    Ok(categories)
}
