//! HTTP fetching.

use crate::error::{PipelineError, PipelineResult};
use async_trait::async_trait;
use bytes::Bytes;

/// Status code and body of a completed request.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Bytes,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches a URL. One outstanding request per call; no retries.
#[async_trait]
pub trait HttpFetcher: Send + Sync + 'static {
    /// Perform a GET. Transport failures are errors; any HTTP status is a
    /// successful response.
    async fn fetch(&self, url: &str) -> PipelineResult<FetchResponse>;
}

/// Fetch a URL and require a 2xx status.
pub async fn fetch_success(fetcher: &dyn HttpFetcher, url: &str) -> PipelineResult<Bytes> {
    let response = fetcher.fetch(url).await?;
    if !response.is_success() {
        return Err(PipelineError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }
    Ok(response.body)
}

/// [`HttpFetcher`] backed by a shared `reqwest` client.
#[derive(Clone, Default)]
pub struct ReqwestFetcher {
    http: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> PipelineResult<FetchResponse> {
        let transport = |e: reqwest::Error| PipelineError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.http.get(url).send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport)?;
        Ok(FetchResponse { status, body })
    }
}
