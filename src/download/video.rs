//! Video pipeline: resolve, select a format, stream to disk.

use std::sync::Arc;

use crate::download::context::RunContext;
use crate::download::stream::stream_to_disk;
use crate::error::Result;
use crate::fs::naming::sanitize_filename;
use crate::net::Fetcher;
use crate::video::{select_format, VideoResolver};

/// Process one externally-hosted video entry.
///
/// Resolution and format selection happen under the worker's wait. The byte
/// transfer itself runs as a spawned task registered in the outstanding-set,
/// so the completion coordinator keeps the run open until the stream fully
/// finishes even though the worker has already moved on.
pub async fn process_video(
    ctx: &Arc<RunContext>,
    fetcher: &Arc<dyn Fetcher>,
    resolver: &Arc<dyn VideoResolver>,
    source_url: &str,
) -> Result<()> {
    let info = resolver.resolve(source_url).await?;
    ctx.note_available_video();

    let filename = sanitize_filename(&format!("{}.mp4", info.id))?;
    let dest = ctx.video_dir.join(filename);

    if dest.exists() {
        if ctx.show_skipped {
            tracing::debug!("Skipping existing video: {}", dest.display());
        }
        return Ok(());
    }

    let Some(format) = select_format(&info) else {
        // No qualifying format is a silent skip, not an error
        tracing::debug!("No suitable format for video {}", info.id);
        return Ok(());
    };
    let format_url = format.url.clone();

    // Register before the transfer starts so the run cannot finalize while
    // this stream is still open.
    let guard = ctx.in_flight().register();
    let ctx = Arc::clone(ctx);
    let fetcher = Arc::clone(fetcher);

    tokio::spawn(async move {
        let _guard = guard;

        let response = match fetcher.fetch(&format_url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Video fetch failed for {}: {}", dest.display(), e);
                return;
            }
        };

        match stream_to_disk(response, &dest, false).await {
            Ok(()) => {
                ctx.note_downloaded_video();
                if ctx.show_downloads {
                    tracing::info!("Downloaded video: {}", dest.display());
                }
            }
            Err(e) => {
                tracing::warn!("Video download failed for {}: {}", dest.display(), e);
            }
        }
    });

    Ok(())
}
