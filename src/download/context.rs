//! Shared run state: counters, outstanding-set, and the completion latch.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use crate::config::Config;
use crate::download::inflight::InFlightSet;

/// Shared, long-lived state for one backup invocation.
///
/// Created once before the queue drains and shared by every worker. The four
/// counters are the only fields mutated after setup, and every mutation is a
/// single atomic increment.
#[derive(Debug)]
pub struct RunContext {
    /// Directory direct enclosures are written to.
    pub asset_dir: PathBuf,

    /// Directory resolved videos are written to.
    pub video_dir: PathBuf,

    /// Number of workers the scheduler starts.
    pub concurrency: usize,

    /// Whether the video pipeline is enabled.
    pub videos_enabled: bool,

    /// Whether to log each completed download.
    pub show_downloads: bool,

    /// Whether to log dedup hits.
    pub show_skipped: bool,

    available_assets: AtomicU64,
    downloaded_assets: AtomicU64,
    available_videos: AtomicU64,
    downloaded_videos: AtomicU64,

    in_flight: Arc<InFlightSet>,
    report: OnceLock<BackupReport>,
}

impl RunContext {
    /// Create a context with default output options.
    pub fn new(backup_dir: PathBuf, concurrency: usize, videos_enabled: bool) -> Self {
        let video_dir = backup_dir.join(crate::config::loader::VIDEO_SUBDIR);
        Self {
            asset_dir: backup_dir,
            video_dir,
            concurrency,
            videos_enabled,
            show_downloads: true,
            show_skipped: false,
            available_assets: AtomicU64::new(0),
            downloaded_assets: AtomicU64::new(0),
            available_videos: AtomicU64::new(0),
            downloaded_videos: AtomicU64::new(0),
            in_flight: InFlightSet::new(),
            report: OnceLock::new(),
        }
    }

    /// Create a context from a merged configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut ctx = Self::new(
            config.options.backup_directory.clone(),
            config.options.concurrency,
            config.options.download_videos,
        );
        ctx.show_downloads = config.options.show_downloads;
        ctx.show_skipped = config.options.show_skipped_downloads;
        ctx
    }

    pub fn in_flight(&self) -> &Arc<InFlightSet> {
        &self.in_flight
    }

    pub fn note_available_asset(&self) {
        self.available_assets.fetch_add(1, Ordering::Relaxed);
    }

    pub fn note_downloaded_asset(&self) {
        self.downloaded_assets.fetch_add(1, Ordering::Relaxed);
    }

    pub fn note_available_video(&self) {
        self.available_videos.fetch_add(1, Ordering::Relaxed);
    }

    pub fn note_downloaded_video(&self) {
        self.downloaded_videos.fetch_add(1, Ordering::Relaxed);
    }

    /// Wait until every outstanding download has settled, then freeze the
    /// final report. Fires exactly once; later calls return the same frozen
    /// values even if a stray counter reference is incremented afterwards.
    pub async fn await_completion(&self, total: u64) -> BackupReport {
        self.in_flight.drained().await;
        *self.report.get_or_init(|| BackupReport {
            total,
            available_assets: self.available_assets.load(Ordering::Relaxed),
            downloaded_assets: self.downloaded_assets.load(Ordering::Relaxed),
            available_videos: self.available_videos.load(Ordering::Relaxed),
            downloaded_videos: self.downloaded_videos.load(Ordering::Relaxed),
        })
    }
}

/// Immutable final statistics for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupReport {
    /// Entries processed.
    pub total: u64,

    /// Entries carrying an enclosure.
    pub available_assets: u64,

    /// Enclosures actually fetched (dedup misses that completed).
    pub downloaded_assets: u64,

    /// Entries whose video resolved successfully.
    pub available_videos: u64,

    /// Videos actually fetched.
    pub downloaded_videos: u64,
}
