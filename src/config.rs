//! Run configuration: sources, pacing, batching, and output paths.
//!
//! Configuration is a YAML file loaded at startup; every field has a
//! default so a missing file section falls back to the constants the
//! dataset was originally collected with. The CLI can force a single-stage
//! run on top of whatever the file says.

use crate::models::Source;
use serde::Deserialize;
use std::error::Error;
use tokio::fs;
use tracing::info;

/// Static run configuration for both pipeline stages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listing endpoint families to paginate during link discovery.
    pub sources: Vec<Source>,
    /// Candidate pause seconds between listing pages of one source.
    pub link_delay_seconds: Vec<u64>,
    /// Candidate pause seconds between content batches (minor tier).
    pub content_minor_delay_seconds: Vec<u64>,
    /// Candidate pause seconds between content batches (major tier).
    pub content_major_delay_seconds: Vec<u64>,
    /// How many article URLs one batch fetches concurrently.
    pub batch_size: usize,
    /// The major delay tier applies when the processed-link total is an
    /// exact multiple of this; 0 disables the major tier.
    pub major_threshold_links: usize,
    /// Optional cap on listing pages fetched per source.
    pub max_pages: Option<usize>,
    /// Run the link discovery stage.
    pub run_links: bool,
    /// Run the content fetch + combine stages.
    pub run_content: bool,
    /// Directory for per-source and combined link files.
    pub links_output_dir: String,
    /// Directory for per-batch content files.
    pub content_output_dir: String,
    /// Path of the consolidated content file.
    pub combined_content_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                Source {
                    name: "telangana".to_string(),
                    base_url: "https://telugu.suryaa.com/telangana-latest.php?pagination="
                        .to_string(),
                },
                Source {
                    name: "andhrapradesh".to_string(),
                    base_url: "https://telugu.suryaa.com/andhrapradesh-latest.php?pagination="
                        .to_string(),
                },
            ],
            link_delay_seconds: vec![1, 2, 3],
            content_minor_delay_seconds: vec![5],
            content_major_delay_seconds: vec![180],
            batch_size: 200,
            major_threshold_links: 50_000,
            max_pages: None,
            run_links: true,
            run_content: true,
            links_output_dir: "output/links".to_string(),
            content_output_dir: "output/content".to_string(),
            combined_content_file: "output/scraped_content.json".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file and validate it.
    pub async fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let raw = fs::read_to_string(path).await?;
        let config: AppConfig = serde_yaml::from_str(&raw)?;
        config.validate()?;
        info!(
            path,
            sources = config.sources.len(),
            batch_size = config.batch_size,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.batch_size == 0 {
            return Err("batch_size must be at least 1".into());
        }
        if self.run_links && self.sources.is_empty() {
            return Err("run_links is set but no sources are configured".into());
        }
        Ok(())
    }

    /// Path of one source's discovered-links file.
    pub fn source_links_file(&self, source_name: &str) -> String {
        format!("{}/{}.txt", self.links_output_dir, source_name)
    }

    /// Path of the deduplicated combined-links file, the handoff artifact
    /// between the two stages.
    pub fn combined_links_file(&self) -> String {
        format!("{}/combined_links.txt", self.links_output_dir)
    }

    /// Path of one batch's content file.
    pub fn batch_file(&self, batch_index: usize) -> String {
        format!("{}/batch_{}.json", self.content_output_dir, batch_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_collection_constants() {
        let config = AppConfig::default();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.batch_size, 200);
        assert_eq!(config.major_threshold_links, 50_000);
        assert_eq!(config.link_delay_seconds, vec![1, 2, 3]);
        assert_eq!(config.content_minor_delay_seconds, vec![5]);
        assert_eq!(config.content_major_delay_seconds, vec![180]);
        assert!(config.run_links);
        assert!(config.run_content);
        assert_eq!(config.max_pages, None);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("batch_size: 10\nrun_links: false\n").unwrap();
        assert_eq!(config.batch_size, 10);
        assert!(!config.run_links);
        assert!(config.run_content);
        assert_eq!(config.major_threshold_links, 50_000);
    }

    #[test]
    fn test_sources_from_yaml() {
        let yaml = r#"
sources:
  - name: sample
    base_url: "https://example.com/latest.php?pagination="
max_pages: 2
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].name, "sample");
        assert_eq!(config.max_pages, Some(2));
    }

    #[test]
    fn test_validate_rejects_zero_batch_size() {
        let config = AppConfig {
            batch_size: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_links_run_without_sources() {
        let config = AppConfig {
            sources: Vec::new(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            sources: Vec::new(),
            run_links: false,
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_paths() {
        let config = AppConfig::default();
        assert_eq!(config.source_links_file("telangana"), "output/links/telangana.txt");
        assert_eq!(config.combined_links_file(), "output/links/combined_links.txt");
        assert_eq!(config.batch_file(3), "output/content/batch_3.json");
    }
}
