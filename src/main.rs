//! # Telugu Text News
//!
//! A two-stage scraper that builds a Telugu news-text dataset:
//!
//! 1. **Link discovery**: pages through each configured listing endpoint
//!    (`...latest.php?pagination=N`) collecting article links until a page
//!    comes back empty, writing per-source link files and one deduplicated
//!    combined list.
//! 2. **Content scraping**: fetches the combined list in fixed-size
//!    batches, extracting title/body text and count metrics per article,
//!    one JSON file per batch, then merges every batch into a single
//!    consolidated JSON dataset.
//!
//! Both stages pace themselves with randomized pauses picked from
//! configured candidate sets; the content stage escalates to a longer
//! pause every `major_threshold_links` processed links.
//!
//! ## Usage
//!
//! ```sh
//! telugu_text_news --config config.yaml
//! telugu_text_news --links-only        # collect links, scrape later
//! telugu_text_news --content-only      # scrape a previously collected list
//! ```

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod delay;
mod extract;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use config::AppConfig;
use pipeline::Pipeline;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("telugu_text_news starting up");

    let args = Cli::parse();
    debug!(?args.config, args.links_only, args.content_only, "Parsed CLI arguments");

    let mut config = AppConfig::load(&args.config).await.map_err(|e| {
        error!(path = %args.config, error = %e, "Failed to load configuration");
        e
    })?;
    if args.links_only {
        config.run_links = true;
        config.run_content = false;
    } else if args.content_only {
        config.run_links = false;
        config.run_content = true;
    }

    // Early check: fail before any network traffic if outputs can't land.
    if config.run_links {
        ensure_writable_dir(&config.links_output_dir).await.map_err(|e| {
            error!(path = %config.links_output_dir, error = %e, "Links output directory is not writable");
            e
        })?;
    }
    if config.run_content {
        ensure_writable_dir(&config.content_output_dir).await.map_err(|e| {
            error!(path = %config.content_output_dir, error = %e, "Content output directory is not writable");
            e
        })?;
    }

    let pipeline = Pipeline::new(config)?;
    let result = pipeline.run().await;

    let elapsed = start_time.elapsed();
    match &result {
        Ok(()) => info!(
            ?elapsed,
            secs = elapsed.as_secs(),
            "Execution complete"
        ),
        Err(e) => error!(?elapsed, error = %e, "Error occurred during scraping"),
    }
    result
}
