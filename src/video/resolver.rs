//! Video metadata resolution via an external tool.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::video::format::{VideoFormat, VideoInfo};

/// Resolves a source URL into a video identifier and its available formats.
///
/// Resolution failures are recoverable per entry; the pipeline logs them and
/// settles the entry without touching any counter.
#[async_trait]
pub trait VideoResolver: Send + Sync {
    async fn resolve(&self, source_url: &str) -> Result<VideoInfo>;
}

/// Resolver backed by `yt-dlp --dump-single-json`.
pub struct YtDlpResolver {
    program: String,
}

impl YtDlpResolver {
    pub fn new() -> Self {
        Self {
            program: "yt-dlp".to_string(),
        }
    }

    /// Use a different executable, e.g. a pinned path or a test stub.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for YtDlpResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoResolver for YtDlpResolver {
    async fn resolve(&self, source_url: &str) -> Result<VideoInfo> {
        let output = Command::new(&self.program)
            .arg("--dump-single-json")
            .arg("--no-warnings")
            .arg(source_url)
            .output()
            .await
            .map_err(|e| Error::Resolution(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Resolution(stderr.trim().to_string()));
        }

        let info: InfoJson = serde_json::from_slice(&output.stdout)
            .map_err(|e| Error::Resolution(format!("unparsable resolver output: {}", e)))?;

        info.try_into()
    }
}

/// Minimal view of the resolver's `info.json`; only the fields the format
/// policy needs. Everything is optional because older videos lack metadata.
#[derive(Debug, Deserialize)]
struct InfoJson {
    id: Option<String>,
    #[serde(default)]
    formats: Vec<RawFormat>,
}

#[derive(Debug, Deserialize)]
struct RawFormat {
    ext: Option<String>,
    abr: Option<f64>,
    tbr: Option<f64>,
    url: Option<String>,
}

impl TryFrom<InfoJson> for VideoInfo {
    type Error = Error;

    fn try_from(info: InfoJson) -> Result<VideoInfo> {
        let id = info
            .id
            .ok_or_else(|| Error::Resolution("resolver output has no video id".to_string()))?;

        let formats = info
            .formats
            .into_iter()
            .filter_map(|raw| {
                // Formats without a container or URL are undownloadable
                let container = raw.ext?;
                let url = raw.url?;
                Some(VideoFormat {
                    container,
                    audio_bitrate: raw.abr,
                    bitrate: raw.tbr,
                    url,
                })
            })
            .collect();

        Ok(VideoInfo { id, formats })
    }
}
