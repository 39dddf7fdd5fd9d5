//! Per-batch JSON output and the batch combiner.
//!
//! Each content batch is persisted as one pretty-printed JSON array as soon
//! as its fetch round finishes, so an interrupted run keeps everything up
//! to its last completed batch. The combiner folds every batch file into
//! one URL-keyed object.
//!
//! # Merge Order
//!
//! Directory enumeration order is not sorted by batch index (`batch_10`
//! lists before `batch_2` lexicographically, and the OS makes no promise
//! either way), so the combiner sorts by the numeric index parsed from the
//! filename before merging. On a URL collision the record from the
//! highest-numbered batch wins.

use crate::models::ScrapeResult;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument, warn};

/// Write one batch's records as a pretty-printed JSON array.
#[instrument(level = "info", skip_all, fields(%path, count = results.len()))]
pub async fn write_batch(path: &str, results: &[ScrapeResult]) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(results)?;
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, json).await?;
    info!("Wrote batch file");
    Ok(())
}

/// Parse the batch index out of a `batch_{N}.json` file name.
fn batch_index(file_name: &str) -> Option<usize> {
    file_name
        .strip_prefix("batch_")?
        .strip_suffix(".json")?
        .parse()
        .ok()
}

/// Merge every batch file in `content_dir` into one consolidated object.
///
/// Batch files are merged in ascending numeric index order; records are
/// keyed by URL and a collision keeps the record from the later batch.
/// Files in the directory that don't look like batch output are skipped
/// with a warning. Returns the number of distinct URLs written.
///
/// # Errors
///
/// Unreadable or unparseable batch files are errors: a half-written batch
/// is better surfaced than silently dropped from the dataset.
#[instrument(level = "info", skip_all, fields(%content_dir, %combined_path))]
pub async fn combine_batches(
    content_dir: &str,
    combined_path: &str,
) -> Result<usize, Box<dyn Error>> {
    let mut batch_files: Vec<(usize, PathBuf)> = Vec::new();
    let mut entries = fs::read_dir(content_dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        match batch_index(&name) {
            Some(index) => batch_files.push((index, entry.path())),
            None => warn!(file = %name, "Skipping non-batch file in content directory"),
        }
    }
    batch_files.sort_by_key(|(index, _)| *index);

    let mut merged: BTreeMap<String, ScrapeResult> = BTreeMap::new();
    for (index, path) in &batch_files {
        let raw = fs::read_to_string(path).await?;
        let records: Vec<ScrapeResult> = serde_json::from_str(&raw)?;
        info!(batch = index, records = records.len(), "Merging batch");
        for record in records {
            merged.insert(record.url.clone(), record);
        }
    }

    let json = serde_json::to_string_pretty(&merged)?;
    if let Some(parent) = Path::new(combined_path).parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(combined_path, json).await?;
    info!(
        batches = batch_files.len(),
        urls = merged.len(),
        "Combined batch files"
    );
    Ok(merged.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScrapeStatus;

    fn record(url: &str, title: &str) -> ScrapeResult {
        ScrapeResult::success(url, title.to_string(), "body".to_string())
    }

    #[tokio::test]
    async fn test_write_batch_pretty_prints_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content/batch_1.json");
        let path = path.to_str().unwrap().to_string();

        write_batch(&path, &[record("https://example.com/a", "A")])
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n"));
        let parsed: Vec<ScrapeResult> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].url, "https://example.com/a");
    }

    #[test]
    fn test_batch_index_parsing() {
        assert_eq!(batch_index("batch_1.json"), Some(1));
        assert_eq!(batch_index("batch_10.json"), Some(10));
        assert_eq!(batch_index("batch_x.json"), None);
        assert_eq!(batch_index("notes.txt"), None);
        assert_eq!(batch_index("combined.json"), None);
    }

    #[tokio::test]
    async fn test_combine_merges_all_batches() {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("content");
        std::fs::create_dir_all(&content_dir).unwrap();

        let b1 = vec![record("https://example.com/a", "A"), record("https://example.com/b", "B")];
        let b2 = vec![record("https://example.com/c", "C")];
        write_batch(content_dir.join("batch_1.json").to_str().unwrap(), &b1)
            .await
            .unwrap();
        write_batch(content_dir.join("batch_2.json").to_str().unwrap(), &b2)
            .await
            .unwrap();

        let combined_path = dir.path().join("scraped_content.json");
        let count = combine_batches(
            content_dir.to_str().unwrap(),
            combined_path.to_str().unwrap(),
        )
        .await
        .unwrap();
        assert_eq!(count, 3);

        let raw = std::fs::read_to_string(&combined_path).unwrap();
        let merged: BTreeMap<String, ScrapeResult> = serde_json::from_str(&raw).unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged["https://example.com/a"].title, "A");
        assert_eq!(merged["https://example.com/c"].title, "C");
    }

    #[tokio::test]
    async fn test_combine_collision_keeps_highest_batch() {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("content");
        std::fs::create_dir_all(&content_dir).unwrap();

        // batch_2 and batch_10 share a URL; numeric ordering must put
        // batch_10 last even though it sorts first lexicographically.
        let shared = "https://example.com/dup";
        write_batch(
            content_dir.join("batch_2.json").to_str().unwrap(),
            &[record(shared, "from batch 2")],
        )
        .await
        .unwrap();
        write_batch(
            content_dir.join("batch_10.json").to_str().unwrap(),
            &[record(shared, "from batch 10")],
        )
        .await
        .unwrap();

        let combined_path = dir.path().join("scraped_content.json");
        let count = combine_batches(
            content_dir.to_str().unwrap(),
            combined_path.to_str().unwrap(),
        )
        .await
        .unwrap();
        assert_eq!(count, 1);

        let raw = std::fs::read_to_string(&combined_path).unwrap();
        let merged: BTreeMap<String, ScrapeResult> = serde_json::from_str(&raw).unwrap();
        assert_eq!(merged[shared].title, "from batch 10");
    }

    #[tokio::test]
    async fn test_combine_skips_stray_files_and_keeps_failures() {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("content");
        std::fs::create_dir_all(&content_dir).unwrap();
        std::fs::write(content_dir.join("README.txt"), "not a batch").unwrap();

        let records = vec![ScrapeResult::failure("https://example.com/x", "timeout".into())];
        write_batch(content_dir.join("batch_1.json").to_str().unwrap(), &records)
            .await
            .unwrap();

        let combined_path = dir.path().join("scraped_content.json");
        combine_batches(
            content_dir.to_str().unwrap(),
            combined_path.to_str().unwrap(),
        )
        .await
        .unwrap();

        let raw = std::fs::read_to_string(&combined_path).unwrap();
        let merged: BTreeMap<String, ScrapeResult> = serde_json::from_str(&raw).unwrap();
        assert_eq!(merged["https://example.com/x"].status, ScrapeStatus::Failure);
    }

    #[tokio::test]
    async fn test_combine_malformed_batch_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("content");
        std::fs::create_dir_all(&content_dir).unwrap();
        std::fs::write(content_dir.join("batch_1.json"), "[{\"url\": ").unwrap();

        let combined_path = dir.path().join("scraped_content.json");
        let result = combine_batches(
            content_dir.to_str().unwrap(),
            combined_path.to_str().unwrap(),
        )
        .await;
        assert!(result.is_err());
    }
}
