//! Feed Backup - back up media assets referenced by an exported RSS feed.
//!
//! This library downloads every asset an exported content feed points at:
//! direct file enclosures, and (optionally) externally-hosted videos resolved
//! through an external metadata tool.
//!
//! # Features
//!
//! - Concurrent downloads with a configurable worker count
//! - Skips files already present in the backup directory
//! - Optional video resolution and download (mp4 formats with audio)
//! - Single aggregate statistics report after all work settles
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use feed_backup::{
//!     download::{run_backup, RunContext},
//!     feed::parse_feed,
//!     net::HttpFetcher,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = std::fs::read("feed.rss")?;
//!     let entries = parse_feed(&bytes)?;
//!     let ctx = Arc::new(RunContext::new("backup".into(), 20, false));
//!     let fetcher = Arc::new(HttpFetcher::new()?);
//!     let report = run_backup(entries, ctx, fetcher, None).await;
//!     println!("downloaded {} new assets", report.downloaded_assets);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod feed;
pub mod fs;
pub mod net;
pub mod output;
pub mod video;

// Re-exports for convenience
pub use config::Config;
pub use download::{run_backup, BackupReport, RunContext};
pub use error::{Error, Result};
pub use feed::{parse_feed, Entry};
pub use net::{Fetcher, HttpFetcher};
pub use video::{VideoResolver, YtDlpResolver};
