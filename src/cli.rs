//! Command-line interface definitions.
//!
//! Runtime behavior lives in the YAML configuration file; the CLI only
//! points at that file and optionally forces a single-stage run, which is
//! handy when re-scraping content from a link file collected days earlier.

use clap::Parser;

/// Command-line arguments for the scraper.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Run only the link discovery stage, regardless of the config file
    #[arg(long, conflicts_with = "content_only")]
    pub links_only: bool,

    /// Run only the content + combine stages, consuming an existing
    /// combined-links file
    #[arg(long, conflicts_with = "links_only")]
    pub content_only: bool,
}
