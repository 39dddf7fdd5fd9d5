//! Data models for discovered links and scraped article records.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`Source`]: One configured listing endpoint family to paginate
//! - [`ScrapeResult`]: The outcome of fetching and extracting one article
//! - [`ScrapeStatus`]: Success/Failure marker on a [`ScrapeResult`]
//! - [`StopReason`]: Why a source's pagination loop ended
//!
//! The serialized field names on [`ScrapeResult`] (`error_msg`,
//! `total_title_char`, ...) are a compatibility contract with the downstream
//! dataset tooling that consumes the batch and consolidated JSON files.

use serde::{Deserialize, Serialize};

/// One news-listing endpoint family to paginate.
///
/// The page URL for page `N` is `base_url` with `N` appended directly, so
/// `base_url` is expected to end in its pagination query parameter, e.g.
/// `https://telugu.suryaa.com/telangana-latest.php?pagination=`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Source {
    /// Short name used to key this source's link file.
    pub name: String,
    /// Listing URL prefix that page numbers are appended to.
    pub base_url: String,
}

/// Whether an article fetch+extract round trip succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ScrapeStatus {
    Success,
    Failure,
}

/// The outcome of scraping a single article URL.
///
/// On failure the count fields are null and `error_msg` carries the cause;
/// on success `error_msg` is empty. The invariant `status == Failure` ⟺
/// `error_msg` non-empty is maintained by the two constructors.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapeResult {
    /// The article URL this record was scraped from.
    pub url: String,
    /// Trimmed heading text; empty when extraction matched nothing.
    pub title: String,
    /// Trimmed body text; empty when extraction matched nothing.
    pub content: String,
    pub status: ScrapeStatus,
    /// Failure cause; empty on success.
    pub error_msg: String,
    pub total_title_char: Option<u64>,
    pub total_content_char: Option<u64>,
    pub total_title_words: Option<u64>,
    pub total_content_words: Option<u64>,
}

impl ScrapeResult {
    /// Build a success record from extracted title/content text.
    ///
    /// Counts are derived here so callers can't produce a record whose
    /// metrics disagree with its text: character counts are Unicode scalar
    /// counts of the trimmed strings, word counts come from
    /// [`crate::utils::word_count`] (note: 1 for an empty string).
    pub fn success(url: &str, title: String, content: String) -> Self {
        let total_title_char = title.chars().count() as u64;
        let total_content_char = content.chars().count() as u64;
        let total_title_words = crate::utils::word_count(&title) as u64;
        let total_content_words = crate::utils::word_count(&content) as u64;
        Self {
            url: url.to_string(),
            title,
            content,
            status: ScrapeStatus::Success,
            error_msg: String::new(),
            total_title_char: Some(total_title_char),
            total_content_char: Some(total_content_char),
            total_title_words: Some(total_title_words),
            total_content_words: Some(total_content_words),
        }
    }

    /// Build a failure record carrying the error message.
    pub fn failure(url: &str, error_msg: String) -> Self {
        debug_assert!(!error_msg.is_empty(), "failure records need a cause");
        Self {
            url: url.to_string(),
            title: String::new(),
            content: String::new(),
            status: ScrapeStatus::Failure,
            error_msg,
            total_title_char: None,
            total_content_char: None,
            total_title_words: None,
            total_content_words: None,
        }
    }
}

/// Why a source's pagination loop stopped.
///
/// The original scraper folded all of these into a single boolean, which
/// made "site exhausted" indistinguishable from "network fell over" in the
/// logs. Partial links collected before the stop are kept in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A listing page contained zero item containers: end of pagination.
    NoMoreContent,
    /// The listing page fetch failed; earlier pages' links are kept.
    FetchError,
    /// The configured `max_pages` cap was reached.
    PageLimit,
}

/// Everything one source's discovery loop produced.
#[derive(Debug)]
pub struct DiscoveryOutcome {
    /// Links in document order, pages in fetch order, duplicates retained.
    pub links: Vec<String>,
    pub stop: StopReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_record_counts() {
        let r = ScrapeResult::success(
            "https://example.com/a",
            "Two words".to_string(),
            "three word body".to_string(),
        );
        assert_eq!(r.status, ScrapeStatus::Success);
        assert_eq!(r.error_msg, "");
        assert_eq!(r.total_title_char, Some(9));
        assert_eq!(r.total_title_words, Some(2));
        assert_eq!(r.total_content_char, Some(15));
        assert_eq!(r.total_content_words, Some(3));
    }

    #[test]
    fn test_empty_extraction_still_success_with_word_count_one() {
        // Empty trimmed text splits to a single empty token, so the word
        // count is 1 even though the char count is 0.
        let r = ScrapeResult::success("https://example.com/a", String::new(), String::new());
        assert_eq!(r.status, ScrapeStatus::Success);
        assert_eq!(r.total_title_char, Some(0));
        assert_eq!(r.total_title_words, Some(1));
        assert_eq!(r.total_content_words, Some(1));
    }

    #[test]
    fn test_failure_invariant() {
        let r = ScrapeResult::failure("https://example.com/a", "connect timeout".to_string());
        assert_eq!(r.status, ScrapeStatus::Failure);
        assert!(!r.error_msg.is_empty());
        assert!(r.total_title_char.is_none());
        assert!(r.total_content_char.is_none());
        assert!(r.total_title_words.is_none());
        assert!(r.total_content_words.is_none());
    }

    #[test]
    fn test_serialized_field_names_match_dataset_contract() {
        let r = ScrapeResult::failure("https://example.com/a", "boom".to_string());
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["status"], "Failure");
        assert_eq!(v["error_msg"], "boom");
        assert!(v["total_title_char"].is_null());
        assert!(v["total_content_words"].is_null());

        let ok = ScrapeResult::success("u", "t".into(), "c".into());
        let v = serde_json::to_value(&ok).unwrap();
        assert_eq!(v["status"], "Success");
        assert_eq!(v["total_title_char"], 1);
    }
}
