//! Listing page parser

use crate::catalog::BookSummary;
use crate::html::{attribute, select_first, text, Document, HtmlError, Node};

/// A book card from a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub summary: BookSummary,

    /// Relative link to the detail page, as written in the card
    pub href: String,
}

/// Everything the paginator needs from one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Cards in document order
    pub cards: Vec<ListingCard>,

    /// Relative link of the "next" pager control, if any
    pub next_href: Option<String>,

    /// Cards dropped because their heading link was unusable
    pub skipped: usize,
}

/// Parses a category listing page
///
/// Cards are the `article.product_pod` elements. A card whose heading link
/// lacks a `title` or `href` is counted in [`ListingPage::skipped`] and left
/// out, so every returned card has a title.
pub fn parse_listing_page(html: &str) -> Result<ListingPage, HtmlError> {
    let document = Document::parse(html);
    let mut page = ListingPage::default();

    for article in document.select_all("article", Some("product_pod"))? {
        match parse_card(article)? {
            Some(card) => page.cards.push(card),
            None => page.skipped += 1,
        }
    }

    page.next_href = match document.select_first("li", Some("next"))? {
        Some(pager) => select_first(pager, "a", None)?
            .and_then(|link| attribute(link, "href"))
            .map(str::to_string),
        None => None,
    };

    Ok(page)
}

fn parse_card(article: Node<'_>) -> Result<Option<ListingCard>, HtmlError> {
    let Some(heading) = select_first(article, "h3", None)? else {
        tracing::warn!("Book card without heading, skipping");
        return Ok(None);
    };
    let Some(link) = select_first(heading, "a", None)? else {
        tracing::warn!("Book card heading without link, skipping");
        return Ok(None);
    };

    // The visible link text is truncated; the title attribute is not
    let (Some(title), Some(href)) = (attribute(link, "title"), attribute(link, "href")) else {
        tracing::warn!("Book card link missing title or href: '{}'", text(link).trim());
        return Ok(None);
    };

    let price_display = select_first(article, "p", Some("price_color"))?
        .map(text)
        .unwrap_or_default();
    let availability_display = select_first(article, "p", Some("instock availability"))?
        .map(|node| text(node).trim().to_string())
        .unwrap_or_default();

    Ok(Some(ListingCard {
        summary: BookSummary {
            title: title.to_string(),
            price_display,
            availability_display,
        },
        href: href.to_string(),
    }))
}
