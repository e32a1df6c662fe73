//! Book detail page parser
//!
//! The detail page labels nothing we rely on: the product table, paragraphs
//! and breadcrumb links are read by position. Those positions are gathered in
//! [`DETAIL_LAYOUT`] so a markup change means editing one table.

use crate::catalog::{BookDetail, Rating, UnknownRating};
use crate::html::{attribute, class_token, select_first, text, Document, HtmlError, Node};
use crate::url::image_url;
use thiserror::Error;
use url::Url;

/// Literal wrapped around the stock count in the availability cell
const AVAILABILITY_PREFIX: &str = "In stock (";
const AVAILABILITY_SUFFIX: &str = "available)";

/// Why a detail page produced no [`BookDetail`]
#[derive(Debug, Error)]
pub enum AbsenceReason {
    #[error("HTTP {status_code}")]
    HttpStatus { status_code: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No '{0}' element found")]
    MissingElement(&'static str),

    #[error("No {field} at {tag}[{index}]")]
    MissingField {
        field: &'static str,
        tag: &'static str,
        index: usize,
    },

    #[error("'{element}' has no usable '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error(transparent)]
    UnknownRating(#[from] UnknownRating),

    #[error("Invalid image URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Html(#[from] HtmlError),
}

/// A field read from the n-th element of a given tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub tag: &'static str,
    pub index: usize,
}

impl FieldRule {
    /// Text of the element this rule points at among `nodes`
    pub fn pick(&self, nodes: &[Node<'_>]) -> Result<String, AbsenceReason> {
        nodes
            .get(self.index)
            .map(|node| text(*node))
            .ok_or(AbsenceReason::MissingField {
                field: self.field,
                tag: self.tag,
                index: self.index,
            })
    }
}

/// Positional rules for the detail page
#[derive(Debug, Clone, Copy)]
pub struct DetailLayout {
    pub upc: FieldRule,
    pub price_incl_tax: FieldRule,
    pub price_excl_tax: FieldRule,
    pub availability: FieldRule,
    pub description: FieldRule,
    pub category: FieldRule,
}

/// Rules matching the catalog's product page
///
/// Known fragility: the description is the fourth `<p>` and the category the
/// fourth `<a>` only because of the current header and breadcrumb markup.
pub const DETAIL_LAYOUT: DetailLayout = DetailLayout {
    upc: FieldRule { field: "upc", tag: "td", index: 0 },
    price_incl_tax: FieldRule { field: "price_incl_tax", tag: "td", index: 2 },
    price_excl_tax: FieldRule { field: "price_excl_tax", tag: "td", index: 3 },
    availability: FieldRule { field: "availability", tag: "td", index: 5 },
    description: FieldRule { field: "description", tag: "p", index: 3 },
    category: FieldRule { field: "category", tag: "a", index: 3 },
};

/// Removes the stock wording around the count, e.g. `"In stock (22 available)"` → `"22 "`
///
/// The remainder is kept verbatim; it is not parsed as a number.
pub fn clean_availability(raw: &str) -> String {
    raw.replace(AVAILABILITY_PREFIX, "")
        .replace(AVAILABILITY_SUFFIX, "")
}

/// Extracts every detail field from a product page
///
/// Each step is a gate: the first missing element, out-of-range position or
/// unknown rating word aborts extraction and is returned as the reason.
///
/// # Arguments
///
/// * `html` - Body of the detail page
/// * `root` - Site root used to resolve the cover image
pub fn extract_detail(html: &str, root: &Url) -> Result<BookDetail, AbsenceReason> {
    let layout = &DETAIL_LAYOUT;
    let document = Document::parse(html);

    let cells = document.select_all("td", None)?;
    if cells.is_empty() {
        return Err(AbsenceReason::MissingElement("td"));
    }
    let upc = layout.upc.pick(&cells)?;
    let price_incl_tax = layout.price_incl_tax.pick(&cells)?;
    let price_excl_tax = layout.price_excl_tax.pick(&cells)?;
    let availability_count = clean_availability(&layout.availability.pick(&cells)?);

    let paragraphs = document.select_all("p", None)?;
    let description = layout.description.pick(&paragraphs)?;

    let anchors = document.select_all("a", None)?;
    let category_label = layout.category.pick(&anchors)?;

    let rating = document
        .select_first("p", Some("star-rating"))?
        .ok_or(AbsenceReason::MissingElement("p.star-rating"))?;
    let review_rating: Rating = class_token(rating, 1)
        .ok_or(AbsenceReason::MissingAttribute {
            element: "p.star-rating",
            attribute: "class",
        })?
        .parse()?;

    let thumbnail = document
        .select_first("div", Some("thumbnail"))?
        .ok_or(AbsenceReason::MissingElement("div.thumbnail"))?;
    let cover = select_first(thumbnail, "img", None)?
        .ok_or(AbsenceReason::MissingElement("div.thumbnail img"))?;
    let src = attribute(cover, "src").ok_or(AbsenceReason::MissingAttribute {
        element: "div.thumbnail img",
        attribute: "src",
    })?;
    let image_url = image_url(root, src)?.to_string();

    Ok(BookDetail {
        upc,
        price_incl_tax,
        price_excl_tax,
        availability_count,
        description,
        category_label,
        review_rating,
        image_url,
    })
}
