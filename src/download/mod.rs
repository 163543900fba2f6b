//! Download orchestration - the core of the backup run.
//!
//! This module provides:
//! - The FIFO entry queue drained by the worker pool
//! - The shared run context (counters, outstanding-set, completion latch)
//! - Entry classification (asset, video, or skip)
//! - The asset downloader and the video pipeline
//! - The worker pool itself

pub mod asset;
pub mod context;
pub mod dispatch;
pub mod inflight;
pub mod queue;
pub mod stream;
pub mod video;
pub mod worker;

pub use context::{BackupReport, RunContext};
pub use dispatch::{classify, Route};
pub use inflight::{InFlightGuard, InFlightSet};
pub use queue::EntryQueue;
pub use worker::run_backup;
