//! Paginated link discovery across all configured sources.
//!
//! Each source exposes a listing endpoint that takes a page number as a
//! trailing query value (`...latest.php?pagination=3`). The loop walks
//! pages from 1 until a page comes back with zero listing containers,
//! the fetch fails, or the optional page cap is hit, collecting every
//! anchor under every container along the way.

use crate::config::AppConfig;
use crate::delay::DelayPolicy;
use crate::fetch::fetch_html;
use crate::models::{DiscoveryOutcome, Source, StopReason};
use crate::outputs::links::write_links;
use futures::future::join_all;
use itertools::Itertools;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// One listing item on a pagination page.
static LISTING_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("div.media-body").unwrap());

/// Anchors inside a listing item.
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// What one listing page produced.
enum PageOutcome {
    /// Anchors found on the page, in document order.
    Links(Vec<String>),
    /// The loop should stop for this source.
    End(StopReason),
}

/// Fetch one listing page and pull the article links out of it.
///
/// A fetch failure and an item-less page both end the pagination, but for
/// different reasons; the caller keeps whatever earlier pages yielded.
async fn scrape_listing_page(client: &Client, source: &Source, page: usize) -> PageOutcome {
    let page_url = format!("{}{}", source.base_url, page);
    info!(source = %source.name, page, url = %page_url, "Fetching listing page");

    let html = match fetch_html(client, &page_url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(source = %source.name, page, error = %e, "Listing fetch failed; stopping source");
            return PageOutcome::End(StopReason::FetchError);
        }
    };

    let document = Html::parse_document(&html);
    let containers: Vec<_> = document.select(&LISTING_ITEM).collect();
    if containers.is_empty() {
        info!(source = %source.name, page, "No listing items found; end of pagination");
        return PageOutcome::End(StopReason::NoMoreContent);
    }

    // Relative hrefs are resolved against the page URL; anything that
    // doesn't resolve is kept verbatim rather than dropped.
    let base = Url::parse(&page_url).ok();
    let mut links = Vec::new();
    for container in containers {
        for anchor in container.select(&ANCHOR) {
            if let Some(href) = anchor.value().attr("href") {
                let link = base
                    .as_ref()
                    .and_then(|b| b.join(href).ok())
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| href.to_string());
                links.push(link);
            }
        }
    }
    debug!(source = %source.name, page, count = links.len(), "Listing page links");
    PageOutcome::Links(links)
}

/// Walk one source's pages sequentially until a stop condition.
///
/// Pages are strictly ordered: page N+1 is only requested after page N
/// resolved, and the pacing pause sits between them. Duplicates are kept;
/// deduplication happens once at the combined-list write.
#[instrument(level = "info", skip_all, fields(source = %source.name))]
pub async fn discover_source(
    client: &Client,
    source: &Source,
    delay: &DelayPolicy,
    max_pages: Option<usize>,
) -> DiscoveryOutcome {
    let mut page = 1;
    let mut links: Vec<String> = Vec::new();

    loop {
        match scrape_listing_page(client, source, page).await {
            PageOutcome::Links(mut page_links) => {
                links.append(&mut page_links);
            }
            PageOutcome::End(stop) => {
                return DiscoveryOutcome { links, stop };
            }
        }

        if max_pages.is_some_and(|cap| page >= cap) {
            info!(source = %source.name, page, "Page cap reached");
            return DiscoveryOutcome {
                links,
                stop: StopReason::PageLimit,
            };
        }

        page += 1;
        delay.pause().await;
    }
}

/// Run discovery for every configured source and write the link files.
///
/// Sources run concurrently with an explicit join; each finished source
/// persists its own link file, then appends into the shared accumulator.
/// The deduplicated union is written as the combined-links file and
/// returned. A per-source file write failure is logged and the source's
/// links still enter the combined list; a combined-file write failure is
/// fatal because the content stage has no input without it.
#[instrument(level = "info", skip_all, fields(sources = config.sources.len()))]
pub async fn discover_all(
    client: &Client,
    config: &AppConfig,
) -> Result<Vec<String>, Box<dyn Error>> {
    let delay = DelayPolicy::new(&config.link_delay_seconds);
    let combined: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let source_loops = config.sources.iter().map(|source| {
        let combined = Arc::clone(&combined);
        let delay = &delay;
        async move {
            let outcome = discover_source(client, source, delay, config.max_pages).await;
            info!(
                source = %source.name,
                count = outcome.links.len(),
                stop = ?outcome.stop,
                "Source pagination finished"
            );

            let path = config.source_links_file(&source.name);
            if let Err(e) = write_links(&path, &outcome.links).await {
                error!(source = %source.name, %path, error = %e, "Failed to write source link file");
            }

            combined.lock().await.extend(outcome.links);
        }
    });
    join_all(source_loops).await;

    let mut accumulator = combined.lock().await;
    let deduped: Vec<String> = accumulator.drain(..).unique().collect();
    drop(accumulator);

    let combined_path = config.combined_links_file();
    write_links(&combined_path, &deduped).await?;
    info!(count = deduped.len(), path = %combined_path, "Wrote combined link file");
    Ok(deduped)
}
