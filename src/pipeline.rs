//! Stage sequencing: link discovery → content scraping → combine.
//!
//! Two configuration switches pick the stages:
//!
//! - `run_links` and `run_content`: full pipeline
//! - `run_links` only: discover and write link files, stop
//! - `run_content` only: scrape from an existing combined-links file
//!   (typically produced by an earlier links-only run) and combine
//! - neither: no-op
//!
//! The first stage error is logged with its stage name and ends the run;
//! later stages do not execute.

use crate::config::AppConfig;
use crate::fetch::build_http_client;
use crate::outputs::json::combine_batches;
use crate::outputs::links::read_links;
use crate::scrapers::{content, links};
use reqwest::Client;
use std::error::Error;
use tracing::{error, info, instrument};

/// The whole scrape pipeline: configuration plus the shared HTTP client.
pub struct Pipeline {
    config: AppConfig,
    client: Client,
}

impl Pipeline {
    pub fn new(config: AppConfig) -> Result<Self, Box<dyn Error>> {
        let client = build_http_client()?;
        Ok(Self { config, client })
    }

    /// Run the configured stages in order.
    #[instrument(level = "info", skip_all, fields(run_links = self.config.run_links, run_content = self.config.run_content))]
    pub async fn run(&self) -> Result<(), Box<dyn Error>> {
        if !self.config.run_links && !self.config.run_content {
            info!("Both stages disabled; nothing to do");
            return Ok(());
        }

        if self.config.run_links {
            info!("Starting link discovery stage");
            links::discover_all(&self.client, &self.config)
                .await
                .map_err(|e| {
                    error!(stage = "link_discovery", error = %e, "Stage failed; stopping pipeline");
                    e
                })?;
        }

        if self.config.run_content {
            info!("Starting content scraping stage");
            let combined_links = read_links(&self.config.combined_links_file())
                .await
                .map_err(|e| {
                    error!(stage = "content", error = %e, "Could not read combined link file; stopping pipeline");
                    e
                })?;

            content::run_batches(&self.client, &combined_links, &self.config)
                .await
                .map_err(|e| {
                    error!(stage = "content", error = %e, "Stage failed; stopping pipeline");
                    e
                })?;

            info!("Starting combine stage");
            let url_count = combine_batches(
                &self.config.content_output_dir,
                &self.config.combined_content_file,
            )
            .await
            .map_err(|e| {
                error!(stage = "combine", error = %e, "Stage failed; stopping pipeline");
                e
            })?;
            info!(
                urls = url_count,
                path = %self.config.combined_content_file,
                "Consolidated content written"
            );
        }

        Ok(())
    }
}
