//! The two scraping stages: paginated link discovery and batched content fetch.
//!
//! # Stage Pattern
//!
//! | Stage | Module | Input | Output |
//! |-------|--------|-------|--------|
//! | Link discovery | [`links`] | configured sources | per-source link files + combined link file |
//! | Content fetch | [`content`] | combined link file | `batch_{N}.json` files |
//!
//! Discovery fans out across sources concurrently but walks each source's
//! pages strictly in order, because page N+1's URL and the termination
//! check both depend on page N. The content stage runs exactly one batch
//! at a time, which caps outbound request concurrency at the batch size.
//!
//! Both stages pace themselves with [`crate::delay::DelayPolicy`] pauses
//! between rounds; neither retries failures.

pub mod content;
pub mod links;
