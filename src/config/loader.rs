//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default number of simultaneous downloads.
pub const DEFAULT_CONCURRENCY: usize = 20;

/// Name of the video subdirectory under the backup directory.
pub const VIDEO_SUBDIR: &str = "videos";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Backup options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Path to the exported feed file.
    #[serde(default = "default_feed_path")]
    pub feed_path: PathBuf,

    /// Directory the backup is written to.
    #[serde(default = "default_backup_directory")]
    pub backup_directory: PathBuf,

    /// Number of simultaneous downloads.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Whether to resolve and download externally-hosted videos.
    #[serde(default)]
    pub download_videos: bool,

    /// Whether to log each completed download.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to log skipped (already present) files.
    #[serde(default)]
    pub show_skipped_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            feed_path: default_feed_path(),
            backup_directory: default_backup_directory(),
            concurrency: default_concurrency(),
            download_videos: false,
            show_downloads: true,
            show_skipped_downloads: false,
        }
    }
}

fn default_feed_path() -> PathBuf {
    PathBuf::from("feed.rss")
}

fn default_backup_directory() -> PathBuf {
    PathBuf::from("backup")
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Directory video downloads are written to.
    pub fn video_directory(&self) -> PathBuf {
        self.options.backup_directory.join(VIDEO_SUBDIR)
    }
}
