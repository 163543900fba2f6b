//! HTTP fetch collaborator.
//!
//! Downloads go through the [`Fetcher`] trait so the orchestrator can be
//! exercised without a network. The production implementation wraps a shared
//! `reqwest` client with streaming bodies.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::TryStreamExt;

use crate::error::Result;

/// A streamed response body.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// A successful fetch: the body stream plus the advertised length, if any.
pub struct FetchResponse {
    pub content_length: Option<u64>,
    pub stream: ByteStream,
}

/// Streamed HTTP fetch. Every error is recoverable per entry; the
/// orchestrator logs it and moves on.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse>;
}

/// Production fetcher backed by `reqwest`.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a shared connection pool.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("feed-backup/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let content_length = response.content_length();
        let stream = response.bytes_stream().map_err(crate::error::Error::from);
        Ok(FetchResponse {
            content_length,
            stream: Box::pin(stream),
        })
    }
}
