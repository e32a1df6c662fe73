//! Integration tests for Shelf-Scraper
//!
//! These tests use wiremock to serve a miniature copy of the catalog site
//! and run the scraper end-to-end against it.

mod scrape_tests;
