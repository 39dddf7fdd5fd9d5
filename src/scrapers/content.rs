//! Batched article-content scraping over the combined link list.
//!
//! The combined list is partitioned into consecutive batches; each batch's
//! URLs are fetched concurrently in one round, extracted, and persisted as
//! one JSON file before the next batch starts. Between batches the loop
//! pauses on the minor policy, switching to the major policy every
//! `major_threshold_links` processed links. The last batch gets no
//! trailing pause.

use crate::config::AppConfig;
use crate::delay::{DelayPolicy, Tier};
use crate::extract::extract_article;
use crate::fetch::fetch_html;
use crate::models::{ScrapeResult, ScrapeStatus};
use crate::outputs::json::write_batch;
use futures::future::join_all;
use reqwest::Client;
use std::error::Error;
use tracing::{error, info, instrument, warn};

/// Fetch one article and extract its record.
///
/// A fetch failure never aborts the batch; it becomes a Failure record
/// carrying the error message.
pub async fn scrape_article(client: &Client, url: &str) -> ScrapeResult {
    match fetch_html(client, url).await {
        Ok(html) => extract_article(url, &html),
        Err(e) => {
            warn!(%url, error = %e, "Article fetch failed");
            ScrapeResult::failure(url, e.to_string())
        }
    }
}

/// Scrape every link in fixed-size batches, persisting one file per batch.
///
/// Batches run strictly one at a time; within a batch all URLs are fetched
/// concurrently, so peak outbound concurrency equals `batch_size`. A batch
/// file that fails to write is logged and the loop moves on (that batch's
/// records are lost, the run is not).
#[instrument(level = "info", skip_all, fields(total_links = links.len(), batch_size = config.batch_size))]
pub async fn run_batches(
    client: &Client,
    links: &[String],
    config: &AppConfig,
) -> Result<(), Box<dyn Error>> {
    let total_links = links.len();
    if total_links == 0 {
        info!("No links to scrape");
        return Ok(());
    }

    let minor = DelayPolicy::new(&config.content_minor_delay_seconds);
    let major = DelayPolicy::new(&config.content_major_delay_seconds);
    let mut total_processed = 0usize;

    for (i, batch) in links.chunks(config.batch_size).enumerate() {
        let batch_index = i + 1;
        info!(batch_index, size = batch.len(), "Scraping batch");

        let results = join_all(batch.iter().map(|url| scrape_article(client, url))).await;
        let failures = results
            .iter()
            .filter(|r| r.status == ScrapeStatus::Failure)
            .count();
        info!(
            batch_index,
            succeeded = results.len() - failures,
            failed = failures,
            "Batch fetched"
        );

        let path = config.batch_file(batch_index);
        if let Err(e) = write_batch(&path, &results).await {
            error!(batch_index, %path, error = %e, "Failed to persist batch; continuing");
        }

        total_processed += batch.len();
        if total_processed >= total_links {
            break;
        }

        match Tier::select(total_processed, config.major_threshold_links) {
            Tier::Major => {
                info!(total_processed, "Major pause threshold hit");
                major.pause().await;
            }
            Tier::Minor => minor.pause().await,
        }
    }

    info!(total_processed, "Content scraping complete");
    Ok(())
}
