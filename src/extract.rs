//! Article text extraction.
//!
//! Suryaa article pages put the headline and body inside one Bootstrap
//! grid container. Extraction selects that container, reads the heading
//! and the nested body spans, trims both, and derives the count metrics
//! carried on every [`ScrapeResult`].
//!
//! Selectors matching nothing is not an error: the record is still a
//! Success with empty text (the downstream cleaning step filters those),
//! but it is logged so a selector rot on the site is visible in the logs.

use crate::models::ScrapeResult;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Grid container holding both headline and body on article pages.
static ARTICLE_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".col-lg-12.col-md-12").unwrap());

/// Headline element inside the article container.
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());

/// Body text spans, nested inside the inner column of the container.
static BODY: Lazy<Selector> = Lazy::new(|| Selector::parse(".col-md-12 span").unwrap());

/// Concatenated text of every element `selector` matches under `scope`.
fn collect_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    let mut out = String::new();
    for element in scope.select(selector) {
        for piece in element.text() {
            out.push_str(piece);
        }
    }
    out
}

/// Extract title/content from an article page and build its record.
///
/// Takes the first matching container; a page with no container at all
/// yields an empty-text Success record, same as a container with no
/// heading or body.
pub fn extract_article(url: &str, html: &str) -> ScrapeResult {
    let document = Html::parse_document(html);

    let (title, content) = match document.select(&ARTICLE_CONTAINER).next() {
        Some(container) => {
            let title = collect_text(container, &TITLE).trim().to_string();
            let content = collect_text(container, &BODY).trim().to_string();
            (title, content)
        }
        None => (String::new(), String::new()),
    };

    if title.is_empty() && content.is_empty() {
        warn!(%url, "Article selectors matched no text");
    } else {
        debug!(
            %url,
            title = %truncate_for_log(&title, 80),
            content_chars = content.chars().count(),
            "Extracted article"
        );
    }

    ScrapeResult::success(url, title, content)
}
