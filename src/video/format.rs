//! Resolved video metadata and format selection.

/// Container required by the selection policy.
const STANDARD_CONTAINER: &str = "mp4";

/// Result of resolving a source URL: the host's video identifier and every
/// format the host offers.
#[derive(Debug, Clone)]
pub struct VideoInfo {
    pub id: String,
    pub formats: Vec<VideoFormat>,
}

/// One downloadable format of a resolved video.
#[derive(Debug, Clone)]
pub struct VideoFormat {
    /// Container name, e.g. "mp4" or "webm".
    pub container: String,

    /// Audio bitrate in kbit/s; absent for video-only formats.
    pub audio_bitrate: Option<f64>,

    /// Overall bitrate in kbit/s.
    pub bitrate: Option<f64>,

    /// Direct download URL for this format.
    pub url: String,
}

/// Pick the format to download: the first one in an mp4 container that
/// carries both an audio bitrate and an overall bitrate (i.e. a muxed stream
/// with known quality). `None` means nothing qualifies and the video is
/// skipped silently.
pub fn select_format(info: &VideoInfo) -> Option<&VideoFormat> {
    info.formats.iter().find(|f| {
        f.container == STANDARD_CONTAINER && f.audio_bitrate.is_some() && f.bitrate.is_some()
    })
}
