//! Newline-separated link files.
//!
//! Per-source files keep every discovered link in discovery order,
//! duplicates included; the combined file is the deduplicated union and is
//! the only input the content stage reads.

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Write links to `path`, one per line, creating parent directories.
#[instrument(level = "info", skip_all, fields(%path, count = links.len()))]
pub async fn write_links(path: &str, links: &[String]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, links.join("\n")).await?;
    info!("Scraped links saved");
    Ok(())
}

/// Read a link file back: trimmed lines, empty lines dropped.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn read_links(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let raw = fs::read_to_string(path).await?;
    let links: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    info!(count = links.len(), "Read link file");
    Ok(links)
}
