//! Entry classification.

use crate::feed::Entry;
use crate::video::is_video_host;

/// Where an entry is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Direct enclosure download.
    Asset(String),

    /// Externally-hosted video, identified by its source URL.
    Video(String),

    /// Nothing to back up; the entry still counts as processed.
    Skip,
}

/// Classify an entry. Pure, no I/O.
///
/// An enclosure always wins. Otherwise the attributes payload decides:
/// a malformed payload is treated as "no match", and the video route is
/// taken only when video downloads are enabled, the media type is "video",
/// and the source URL belongs to a known video host.
pub fn classify(entry: &Entry, videos_enabled: bool) -> Route {
    if let Some(url) = &entry.enclosure_url {
        return Route::Asset(url.clone());
    }

    let attrs = match entry.parse_attributes() {
        Ok(Some(attrs)) => attrs,
        Ok(None) => return Route::Skip,
        Err(e) => {
            tracing::debug!("skipping entry with malformed attributes: {}", e);
            return Route::Skip;
        }
    };

    if videos_enabled && attrs.kind.as_deref() == Some("video") {
        if let Some(source) = attrs.source {
            if is_video_host(&source) {
                return Route::Video(source);
            }
        }
    }

    Route::Skip
}
