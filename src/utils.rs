//! Utility functions for text metrics, logging, and file system checks.

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Count whitespace-separated words the way a naive split does.
///
/// Splitting an empty string on runs of whitespace still yields one (empty)
/// token, so the word count of an empty string is `1`, not `0`. The
/// downstream dataset was built with that convention and filters on it, so
/// it is preserved here deliberately.
///
/// Callers are expected to pass trimmed text.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(word_count("చంద్రబాబు సమీక్ష"), 2);
/// assert_eq!(word_count(""), 1);
/// ```
pub fn word_count(s: &str) -> usize {
    if s.is_empty() {
        return 1;
    }
    s.split_whitespace().count()
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` bytes with an ellipsis and byte
/// count indicator appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
