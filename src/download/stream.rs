//! Streaming a fetched body to disk.

use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::net::FetchResponse;

/// Minimum advertised size to show a progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Pipe a response body to `path`.
///
/// On any mid-stream failure the partial file is removed before the error is
/// returned, so a rerun's existence check does not mistake a truncated file
/// for a completed download.
pub(crate) async fn stream_to_disk(
    response: FetchResponse,
    path: &Path,
    show_progress: bool,
) -> Result<()> {
    let content_length = response.content_length;
    let show = show_progress
        && content_length
            .map(|l| l > PROGRESS_THRESHOLD)
            .unwrap_or(false);

    let progress = if show {
        let pb = ProgressBar::new(content_length.unwrap_or(0));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let result = copy_stream(response, path, progress.as_ref()).await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if result.is_err() {
        let _ = tokio::fs::remove_file(path).await;
    }

    result
}

async fn copy_stream(
    mut response: FetchResponse,
    path: &Path,
    progress: Option<&ProgressBar>,
) -> Result<()> {
    let mut file = File::create(path).await?;
    let mut downloaded: u64 = 0;

    while let Some(chunk) = response.stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;
    Ok(())
}
