//! HTML extraction primitives
//!
//! A thin layer over `scraper` that every page parser in the crate goes
//! through:
//! - parse a raw body into a [`Document`]
//! - select elements by tag and exact class tokens
//! - read attributes (absent is distinct from empty)
//! - collect text content

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// An element handle borrowed from a parsed [`Document`]
pub type Node<'a> = ElementRef<'a>;

/// Errors raised while building selectors
#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// A parsed HTML document
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document; malformed markup is repaired, never rejected
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// The `<html>` element; selections from it cover the whole document
    pub fn root(&self) -> Node<'_> {
        self.html.root_element()
    }

    /// Shorthand for [`select_all`] from the document root
    pub fn select_all(&self, tag: &str, class: Option<&str>) -> Result<Vec<Node<'_>>, HtmlError> {
        select_all(self.root(), tag, class)
    }

    /// Shorthand for [`select_first`] from the document root
    pub fn select_first(
        &self,
        tag: &str,
        class: Option<&str>,
    ) -> Result<Option<Node<'_>>, HtmlError> {
        select_first(self.root(), tag, class)
    }
}

/// Builds a selector for `tag` carrying every whitespace-separated token of `class`
///
/// Class tokens match exactly: `p.star-rating` matches
/// `class="star-rating Three"` but not `class="star-ratings"`.
pub fn build_selector(tag: &str, class: Option<&str>) -> Result<Selector, HtmlError> {
    let mut css = tag.to_string();
    if let Some(class) = class {
        for token in class.split_whitespace() {
            css.push('.');
            css.push_str(token);
        }
    }
    parse_selector(&css)
}

/// Parses a raw CSS selector
pub fn parse_selector(css: &str) -> Result<Selector, HtmlError> {
    Selector::parse(css).map_err(|e| HtmlError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Selects every descendant of `scope` matching `tag` and `class`, in document order
pub fn select_all<'a>(
    scope: Node<'a>,
    tag: &str,
    class: Option<&str>,
) -> Result<Vec<Node<'a>>, HtmlError> {
    let selector = build_selector(tag, class)?;
    Ok(scope.select(&selector).collect())
}

/// Selects the first descendant of `scope` matching `tag` and `class`
pub fn select_first<'a>(
    scope: Node<'a>,
    tag: &str,
    class: Option<&str>,
) -> Result<Option<Node<'a>>, HtmlError> {
    let selector = build_selector(tag, class)?;
    Ok(scope.select(&selector).next())
}

/// Reads an attribute; `None` when the attribute is missing
pub fn attribute<'a>(node: Node<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}

/// Concatenates every text node below `node`, untrimmed
pub fn text(node: Node<'_>) -> String {
    node.text().collect()
}

/// Returns the `index`-th whitespace-separated token of the `class` attribute
pub fn class_token<'a>(node: Node<'a>, index: usize) -> Option<&'a str> {
    attribute(node, "class")?.split_whitespace().nth(index)
}
