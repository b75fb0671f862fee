//! Media URL extraction from page markup.
//!
//! The [`MediaExtractor`] trait is the seam between the orchestrator and
//! the scraping approach, so the regex scanner in [`regex`] can be
//! swapped for a structured parser without touching the download loop.

pub mod regex;

pub use self::regex::RegexExtractor;

/// Extracts downloadable media URLs from a fetched page body.
pub trait MediaExtractor {
    /// Scan the page text and return de-duplicated media URLs in
    /// first-seen order. An empty result means the page contains no
    /// media; it is not an error.
    fn extract_media_urls(&self, html: &str) -> Vec<String>;
}
