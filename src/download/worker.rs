//! Worker pool and run orchestration.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::download::asset::download_asset;
use crate::download::context::{BackupReport, RunContext};
use crate::download::dispatch::{classify, Route};
use crate::download::queue::EntryQueue;
use crate::download::video::process_video;
use crate::feed::Entry;
use crate::net::Fetcher;
use crate::video::VideoResolver;

/// Drain the entry queue with `ctx.concurrency` workers and return the final
/// statistics once every dispatched download has settled.
///
/// Pass `resolver: None` when video downloads are disabled; the video
/// pipeline is then never invoked. Per-entry failures are logged and never
/// abort the run.
pub async fn run_backup(
    entries: Vec<Entry>,
    ctx: Arc<RunContext>,
    fetcher: Arc<dyn Fetcher>,
    resolver: Option<Arc<dyn VideoResolver>>,
) -> BackupReport {
    let total = entries.len() as u64;
    tracing::info!("{} entries to process", total);

    let queue = Arc::new(EntryQueue::new(entries));

    // Fixed-size pool: exactly `concurrency` workers, started up front.
    let mut workers = JoinSet::new();
    for worker_id in 0..ctx.concurrency {
        let queue = Arc::clone(&queue);
        let ctx = Arc::clone(&ctx);
        let fetcher = Arc::clone(&fetcher);
        let resolver = resolver.clone();
        workers.spawn(worker_loop(worker_id, queue, ctx, fetcher, resolver));
    }

    // All workers retired implies no worker-held entry is unsettled; spawned
    // video transfers are awaited through the outstanding-set.
    while workers.join_next().await.is_some() {}

    ctx.await_completion(total).await
}

/// One worker: pull, dispatch, wait for the entry to settle, repeat.
///
/// An empty queue retires this worker permanently; other workers may still
/// be mid-download.
async fn worker_loop(
    worker_id: usize,
    queue: Arc<EntryQueue>,
    ctx: Arc<RunContext>,
    fetcher: Arc<dyn Fetcher>,
    resolver: Option<Arc<dyn VideoResolver>>,
) {
    loop {
        let Some(entry) = queue.pull_next() else {
            tracing::debug!(worker_id, "queue empty, worker retiring");
            return;
        };

        let remaining = queue.remaining();
        if remaining > 0 && remaining % 100 == 0 {
            tracing::info!("{} entries left", remaining);
        }

        process_entry(&ctx, &fetcher, resolver.as_ref(), entry).await;
    }
}

/// Dispatch one entry and wait for its processing to settle. Both success
/// and recoverable failure are non-fatal outcomes.
async fn process_entry(
    ctx: &Arc<RunContext>,
    fetcher: &Arc<dyn Fetcher>,
    resolver: Option<&Arc<dyn VideoResolver>>,
    entry: Entry,
) {
    let videos_enabled = ctx.videos_enabled && resolver.is_some();

    match classify(&entry, videos_enabled) {
        Route::Asset(url) => {
            if let Err(e) = download_asset(ctx, fetcher.as_ref(), &url).await {
                tracing::warn!("Asset download failed for {}: {}", url, e);
            }
        }
        Route::Video(source) => {
            // classify only yields this route when a resolver is present
            if let Some(resolver) = resolver {
                if let Err(e) = process_video(ctx, fetcher, resolver, &source).await {
                    tracing::warn!("Video processing failed for {}: {}", source, e);
                }
            }
        }
        Route::Skip => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::path::Path;

    use async_trait::async_trait;
    use bytes::Bytes;
    use futures::stream;
    use tempfile::TempDir;

    use crate::error::{Error, Result};
    use crate::net::FetchResponse;
    use crate::video::{VideoFormat, VideoInfo};

    /// Fetcher serving canned bodies; any other URL fails with a transport
    /// error.
    struct MockFetcher {
        bodies: HashMap<String, Vec<u8>>,
    }

    impl MockFetcher {
        fn new(bodies: &[(&str, &[u8])]) -> Self {
            Self {
                bodies: bodies
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.to_vec()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl Fetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchResponse> {
            match self.bodies.get(url) {
                Some(body) => Ok(FetchResponse {
                    content_length: Some(body.len() as u64),
                    stream: Box::pin(stream::iter(vec![Ok(Bytes::from(body.clone()))])),
                }),
                None => Err(Error::Download(format!("unreachable: {}", url))),
            }
        }
    }

    /// Resolver serving canned metadata; any other URL fails to resolve.
    struct MockResolver {
        videos: HashMap<String, VideoInfo>,
    }

    #[async_trait]
    impl VideoResolver for MockResolver {
        async fn resolve(&self, source_url: &str) -> Result<VideoInfo> {
            self.videos
                .get(source_url)
                .cloned()
                .ok_or_else(|| Error::Resolution(format!("no such video: {}", source_url)))
        }
    }

    fn enclosure_entry(url: &str) -> Entry {
        Entry {
            enclosure_url: Some(url.to_string()),
            attributes: None,
        }
    }

    fn video_entry(source: &str) -> Entry {
        Entry {
            enclosure_url: None,
            attributes: Some(format!(r#"{{"type":"video","source":"{}"}}"#, source)),
        }
    }

    fn text_entry() -> Entry {
        Entry {
            enclosure_url: None,
            attributes: Some(r#"{"type":"text"}"#.to_string()),
        }
    }

    fn make_ctx(dir: &Path, concurrency: usize, videos: bool) -> Arc<RunContext> {
        Arc::new(RunContext::new(dir.to_path_buf(), concurrency, videos))
    }

    async fn run(
        entries: Vec<Entry>,
        dir: &Path,
        concurrency: usize,
        fetcher: Arc<dyn Fetcher>,
        resolver: Option<Arc<dyn VideoResolver>>,
    ) -> BackupReport {
        let ctx = make_ctx(dir, concurrency, resolver.is_some());
        if resolver.is_some() {
            std::fs::create_dir_all(dir.join("videos")).unwrap();
        }
        run_backup(entries, ctx, fetcher, resolver).await
    }

    const WATCH_URL: &str = "https://www.youtube.com/watch?v=abc123";

    fn resolver_with(formats: Vec<VideoFormat>) -> Arc<dyn VideoResolver> {
        let mut videos = HashMap::new();
        videos.insert(
            WATCH_URL.to_string(),
            VideoInfo {
                id: "abc123".to_string(),
                formats,
            },
        );
        Arc::new(MockResolver { videos })
    }

    fn mp4_format(url: &str) -> VideoFormat {
        VideoFormat {
            container: "mp4".to_string(),
            audio_bitrate: Some(128.0),
            bitrate: Some(1200.0),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mixed_scenario_counts_and_files() {
        let tmp = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new(&[(
            "http://cdn.example.com/pic_1.jpg",
            b"jpegbytes",
        )]));

        let entries = vec![
            enclosure_entry("http://cdn.example.com/pic_1.jpg"),
            text_entry(),
            enclosure_entry("http://cdn.example.com/missing.jpg"),
        ];

        let report = run(entries, tmp.path(), 4, fetcher, None).await;

        assert_eq!(report.total, 3);
        assert_eq!(report.available_assets, 2);
        assert_eq!(report.downloaded_assets, 1);
        assert_eq!(report.available_videos, 0);
        assert_eq!(report.downloaded_videos, 0);

        assert_eq!(
            std::fs::read(tmp.path().join("pic_1.jpg")).unwrap(),
            b"jpegbytes"
        );
        assert!(!tmp.path().join("missing.jpg").exists());
    }

    #[tokio::test]
    async fn test_duplicate_enclosure_is_a_dedup_hit() {
        let tmp = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new(&[(
            "http://cdn.example.com/pic_1.jpg",
            b"jpegbytes",
        )]));

        let entries = vec![
            enclosure_entry("http://cdn.example.com/pic_1.jpg"),
            enclosure_entry("http://cdn.example.com/pic_1.jpg"),
        ];

        // Serial so the first download finishes before the second entry's
        // existence check
        let report = run(entries, tmp.path(), 1, fetcher, None).await;

        assert_eq!(report.available_assets, 2);
        assert_eq!(report.downloaded_assets, 1);
    }

    #[tokio::test]
    async fn test_second_run_downloads_nothing() {
        let tmp = TempDir::new().unwrap();
        let fetcher: Arc<dyn Fetcher> = Arc::new(MockFetcher::new(&[
            ("http://cdn.example.com/a.jpg", b"aaa"),
            ("http://cdn.example.com/b.png", b"bbb"),
        ]));

        let entries = vec![
            enclosure_entry("http://cdn.example.com/a.jpg"),
            enclosure_entry("http://cdn.example.com/b.png"),
            text_entry(),
        ];

        let first = run(entries.clone(), tmp.path(), 4, Arc::clone(&fetcher), None).await;
        assert_eq!(first.available_assets, 2);
        assert_eq!(first.downloaded_assets, 2);

        let second = run(entries, tmp.path(), 4, fetcher, None).await;
        assert_eq!(second.available_assets, 2);
        assert_eq!(second.downloaded_assets, 0);
    }

    #[tokio::test]
    async fn test_final_counters_do_not_depend_on_concurrency() {
        let bodies: Vec<(String, Vec<u8>)> = (0..20)
            .map(|i| {
                (
                    format!("http://cdn.example.com/file_{}.jpg", i),
                    format!("body {}", i).into_bytes(),
                )
            })
            .collect();
        let fetcher_bodies: Vec<(&str, &[u8])> = bodies
            .iter()
            .map(|(u, b)| (u.as_str(), b.as_slice()))
            .collect();

        let mut entries: Vec<Entry> = bodies
            .iter()
            .map(|(url, _)| enclosure_entry(url))
            .collect();
        entries.push(enclosure_entry("http://cdn.example.com/unreachable.jpg"));
        entries.push(text_entry());

        let serial_dir = TempDir::new().unwrap();
        let serial = run(
            entries.clone(),
            serial_dir.path(),
            1,
            Arc::new(MockFetcher::new(&fetcher_bodies)),
            None,
        )
        .await;

        let parallel_dir = TempDir::new().unwrap();
        let parallel = run(
            entries,
            parallel_dir.path(),
            8,
            Arc::new(MockFetcher::new(&fetcher_bodies)),
            None,
        )
        .await;

        assert_eq!(serial, parallel);
        assert_eq!(serial.available_assets, 21);
        assert_eq!(serial.downloaded_assets, 20);
    }

    #[tokio::test]
    async fn test_video_entry_ignored_when_videos_disabled() {
        let tmp = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new(&[]));

        let report = run(vec![video_entry(WATCH_URL)], tmp.path(), 2, fetcher, None).await;

        assert_eq!(report.total, 1);
        assert_eq!(report.available_videos, 0);
        assert_eq!(report.downloaded_videos, 0);
    }

    #[tokio::test]
    async fn test_video_pipeline_downloads_selected_format() {
        let tmp = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new(&[(
            "http://host.example/muxed.mp4",
            b"mp4bytes",
        )]));
        let resolver = resolver_with(vec![
            VideoFormat {
                container: "webm".to_string(),
                audio_bitrate: Some(128.0),
                bitrate: Some(900.0),
                url: "http://host.example/ignored.webm".to_string(),
            },
            mp4_format("http://host.example/muxed.mp4"),
        ]);

        let report = run(
            vec![video_entry(WATCH_URL)],
            tmp.path(),
            2,
            fetcher,
            Some(resolver),
        )
        .await;

        assert_eq!(report.available_videos, 1);
        assert_eq!(report.downloaded_videos, 1);
        assert_eq!(
            std::fs::read(tmp.path().join("videos/abc123.mp4")).unwrap(),
            b"mp4bytes"
        );
    }

    #[tokio::test]
    async fn test_resolution_failure_settles_silently() {
        let tmp = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new(&[]));
        let resolver: Arc<dyn VideoResolver> = Arc::new(MockResolver {
            videos: HashMap::new(),
        });

        let report = run(
            vec![video_entry(WATCH_URL)],
            tmp.path(),
            2,
            fetcher,
            Some(resolver),
        )
        .await;

        assert_eq!(report.total, 1);
        assert_eq!(report.available_videos, 0);
        assert_eq!(report.downloaded_videos, 0);
    }

    #[tokio::test]
    async fn test_no_matching_format_is_a_silent_skip() {
        let tmp = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new(&[]));
        let resolver = resolver_with(vec![VideoFormat {
            container: "webm".to_string(),
            audio_bitrate: Some(128.0),
            bitrate: Some(900.0),
            url: "http://host.example/only.webm".to_string(),
        }]);

        let report = run(
            vec![video_entry(WATCH_URL)],
            tmp.path(),
            2,
            fetcher,
            Some(resolver),
        )
        .await;

        assert_eq!(report.available_videos, 1);
        assert_eq!(report.downloaded_videos, 0);
        assert!(!tmp.path().join("videos/abc123.mp4").exists());
    }

    #[tokio::test]
    async fn test_existing_video_is_a_dedup_hit() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("videos")).unwrap();
        std::fs::write(tmp.path().join("videos/abc123.mp4"), b"already here").unwrap();

        let fetcher = Arc::new(MockFetcher::new(&[(
            "http://host.example/muxed.mp4",
            b"mp4bytes",
        )]));
        let resolver = resolver_with(vec![mp4_format("http://host.example/muxed.mp4")]);

        let report = run(
            vec![video_entry(WATCH_URL)],
            tmp.path(),
            2,
            fetcher,
            Some(resolver),
        )
        .await;

        assert_eq!(report.available_videos, 1);
        assert_eq!(report.downloaded_videos, 0);
        assert_eq!(
            std::fs::read(tmp.path().join("videos/abc123.mp4")).unwrap(),
            b"already here"
        );
    }

    #[tokio::test]
    async fn test_downloaded_never_exceeds_available() {
        let tmp = TempDir::new().unwrap();
        let fetcher = Arc::new(MockFetcher::new(&[(
            "http://cdn.example.com/a.jpg",
            b"aaa",
        )]));

        let entries = vec![
            enclosure_entry("http://cdn.example.com/a.jpg"),
            enclosure_entry("http://cdn.example.com/gone.jpg"),
            enclosure_entry("http://cdn.example.com/also-gone.jpg"),
        ];

        let report = run(entries, tmp.path(), 3, fetcher, None).await;
        assert!(report.downloaded_assets <= report.available_assets);
        assert!(report.downloaded_videos <= report.available_videos);
    }
}
