//! Externally-hosted video support.
//!
//! Resolution of a source URL into downloadable formats is delegated to an
//! external tool behind the [`VideoResolver`] trait; this module also owns
//! the format-selection policy and the video-host URL check the dispatcher
//! relies on.

pub mod format;
pub mod resolver;

pub use format::{select_format, VideoFormat, VideoInfo};
pub use resolver::{VideoResolver, YtDlpResolver};

use std::sync::OnceLock;

use regex::Regex;

/// Whether a source URL points at a known video host.
pub fn is_video_host(url: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        Regex::new(r"^https?://(?:www\.)?(?:youtube\.com/(?:watch\?|shorts/)|youtu\.be/)")
            .unwrap()
    });
    re.is_match(url)
}
