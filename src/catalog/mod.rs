//! Catalog data model and page parsers
//!
//! Everything in this module works on already-fetched HTML, so each page
//! type can be tested offline:
//! - the home page sidebar yields [`Category`] entries
//! - a listing page yields book cards and the next-page link
//! - a detail page yields a [`BookDetail`] or the reason it is absent

mod categories;
mod detail;
mod listing;
mod rating;

pub use categories::parse_categories;
pub use detail::{
    clean_availability, extract_detail, AbsenceReason, DetailLayout, FieldRule, DETAIL_LAYOUT,
};
pub use listing::{parse_listing_page, ListingCard, ListingPage};
pub use rating::{Rating, UnknownRating};

/// A category link from the site sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Trimmed link text, e.g. "Travel"
    pub name: String,

    /// Absolute URL of the category's first listing page
    pub listing_url: String,
}

/// Fields read from a book card on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    /// Full title from the card link's `title` attribute
    pub title: String,

    /// Price as displayed on the card
    pub price_display: String,

    /// Availability text as displayed on the card, trimmed
    pub availability_display: String,
}

/// Fields read from a book's detail page
///
/// Extraction is all-or-nothing: a detail either carries every field or
/// does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub upc: String,
    pub price_incl_tax: String,
    pub price_excl_tax: String,

    /// Remainder of the availability cell, not parsed as a number
    pub availability_count: String,

    pub description: String,

    /// Category label from the breadcrumb
    pub category_label: String,

    pub review_rating: Rating,

    /// Absolute cover image URL
    pub image_url: String,
}

/// Result of scraping one detail page
#[derive(Debug)]
pub enum DetailOutcome {
    /// Every field was extracted
    Detail(BookDetail),

    /// Some gate failed; the reason is kept for diagnostics
    Absent(AbsenceReason),
}

impl DetailOutcome {
    /// Returns the detail if extraction succeeded
    pub fn detail(&self) -> Option<&BookDetail> {
        match self {
            Self::Detail(detail) => Some(detail),
            Self::Absent(_) => None,
        }
    }

    /// Consumes the outcome, dropping the absence reason
    pub fn into_detail(self) -> Option<BookDetail> {
        match self {
            Self::Detail(detail) => Some(detail),
            Self::Absent(_) => None,
        }
    }

    /// Returns true if the detail page could not be extracted
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }
}

impl From<Result<BookDetail, AbsenceReason>> for DetailOutcome {
    fn from(result: Result<BookDetail, AbsenceReason>) -> Self {
        match result {
            Ok(detail) => Self::Detail(detail),
            Err(reason) => Self::Absent(reason),
        }
    }
}

/// One row of a category CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub summary: BookSummary,

    /// `None` when the detail page was absent; the record keeps its summary
    pub detail: Option<BookDetail>,
}

impl BookRecord {
    /// Merges a listing card with the outcome of its detail page
    pub fn merge(summary: BookSummary, outcome: DetailOutcome) -> Self {
        Self {
            summary,
            detail: outcome.into_detail(),
        }
    }

    /// The book title
    pub fn title(&self) -> &str {
        &self.summary.title
    }

    /// The cover image URL, if the detail page provided one
    pub fn image_url(&self) -> Option<&str> {
        self.detail.as_ref().map(|d| d.image_url.as_str())
    }
}
