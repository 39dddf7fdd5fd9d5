//! Persistence for link lists and scraped-content JSON.
//!
//! This module contains submodules responsible for writing pipeline
//! artifacts to disk:
//!
//! # Submodules
//!
//! - [`links`]: Newline-separated link files (per-source and combined)
//! - [`json`]: Per-batch JSON arrays and the consolidated content file
//!
//! # Output Structure
//!
//! ```text
//! output/
//! ├── links/
//! │   ├── telangana.txt          # one source's links, in discovery order
//! │   ├── andhrapradesh.txt
//! │   └── combined_links.txt     # deduplicated union, content-stage input
//! ├── content/
//! │   ├── batch_1.json           # pretty-printed ScrapeResult array
//! │   └── batch_2.json
//! └── scraped_content.json       # URL-keyed merge of all batches
//! ```

pub mod json;
pub mod links;
