//! Tiered pacing delays between listing pages and content batches.
//!
//! Every pause in the pipeline is a pace-limiter, never a backoff after
//! failure: a policy is an ordered set of candidate durations and one is
//! chosen uniformly at random each time. The content loop switches between
//! a minor and a major policy based on how many links it has processed so
//! far; link discovery uses a single fixed policy between pages.

use rand::{rng, Rng};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Which delay policy the content loop should apply after a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Minor,
    Major,
}

impl Tier {
    /// Pick the tier for the pause after a batch.
    ///
    /// The major tier applies exactly when `total_processed` is a non-zero
    /// multiple of `major_threshold_links`; a threshold of 0 disables the
    /// major tier entirely.
    pub fn select(total_processed: usize, major_threshold_links: usize) -> Self {
        if major_threshold_links > 0 && total_processed % major_threshold_links == 0 {
            Tier::Major
        } else {
            Tier::Minor
        }
    }
}

/// An ordered set of candidate pause durations, in whole seconds.
#[derive(Debug, Clone)]
pub struct DelayPolicy {
    candidates: Vec<u64>,
}

impl DelayPolicy {
    pub fn new(candidate_seconds: &[u64]) -> Self {
        Self {
            candidates: candidate_seconds.to_vec(),
        }
    }

    /// Choose one candidate uniformly at random.
    ///
    /// Returns `None` for an empty policy, which callers treat as "no
    /// pause configured".
    pub fn pick(&self) -> Option<Duration> {
        if self.candidates.is_empty() {
            return None;
        }
        let index = rng().random_range(0..self.candidates.len());
        Some(Duration::from_secs(self.candidates[index]))
    }

    /// Pick a duration and suspend for exactly that long.
    pub async fn pause(&self) {
        match self.pick() {
            Some(duration) => {
                info!(seconds = duration.as_secs(), "Waiting before next request round");
                sleep(duration).await;
                debug!("Resuming");
            }
            None => debug!("Empty delay policy; not pausing"),
        }
    }
}
