//! Backup directory preparation.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Prepare the backup directory tree before the queue starts draining.
///
/// Creates the asset directory, and the video subdirectory when video
/// downloads are enabled. Failure here is fatal to the run.
pub fn prepare_backup_dirs(config: &Config) -> Result<()> {
    ensure_dir(&config.options.backup_directory)?;

    if config.options.download_videos {
        ensure_dir(&config.video_directory())?;
    }

    Ok(())
}
