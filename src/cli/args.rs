//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Feed backup CLI.
#[derive(Parser, Debug)]
#[command(
    name = "feed-backup",
    version,
    about = "Back up media assets referenced by an exported RSS feed",
    long_about = "A CLI tool to back up every asset an exported content feed points at.\n\n\
                  Direct file enclosures are fetched as-is; externally-hosted videos can\n\
                  optionally be resolved and downloaded as well. Files already present in\n\
                  the backup directory are skipped, so reruns only fetch what is missing."
)]
pub struct Args {
    /// Path to the exported feed file.
    #[arg(value_name = "FEED")]
    pub feed: Option<PathBuf>,

    /// Directory to write the backup to.
    #[arg(short = 'd', long = "directory")]
    pub backup_directory: Option<PathBuf>,

    /// Number of simultaneous downloads.
    #[arg(short = 'c', long)]
    pub concurrency: Option<usize>,

    /// Also resolve and download externally-hosted videos (requires yt-dlp).
    #[arg(long)]
    pub videos: bool,

    /// Path to configuration file.
    #[arg(long, default_value = "feed-backup.toml")]
    pub config: PathBuf,

    /// Hide per-download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Show information about skipped (already present) files.
    #[arg(long)]
    pub show_skipped: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(feed) = self.feed {
            config.options.feed_path = feed;
        }

        if let Some(dir) = self.backup_directory {
            config.options.backup_directory = dir;
        }

        if let Some(concurrency) = self.concurrency {
            config.options.concurrency = concurrency;
        }

        // Boolean flags (only override if set to non-default)
        if self.videos {
            config.options.download_videos = true;
        }

        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped_downloads = false;
        }

        if self.show_skipped {
            config.options.show_skipped_downloads = true;
        }
    }
}
