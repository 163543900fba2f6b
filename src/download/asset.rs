//! Direct enclosure downloading.

use crate::download::context::RunContext;
use crate::download::stream::stream_to_disk;
use crate::error::Result;
use crate::fs::filename_from_url;
use crate::net::Fetcher;

/// Download one enclosure into the asset directory.
///
/// The entry qualifies as an available asset the moment it reaches this
/// function; `downloaded_assets` only moves when bytes were actually newly
/// written. An existing destination file settles the entry with no fetch.
pub async fn download_asset(ctx: &RunContext, fetcher: &dyn Fetcher, url: &str) -> Result<()> {
    ctx.note_available_asset();

    let filename = filename_from_url(url)?;
    let dest = ctx.asset_dir.join(&filename);

    if dest.exists() {
        if ctx.show_skipped {
            tracing::debug!("Skipping existing file: {}", dest.display());
        }
        return Ok(());
    }

    let response = fetcher.fetch(url).await?;
    stream_to_disk(response, &dest, ctx.show_downloads).await?;

    ctx.note_downloaded_asset();
    if ctx.show_downloads {
        tracing::info!("Downloaded: {}", dest.display());
    }

    Ok(())
}
