#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use image::{ImageFormat, Rgba, RgbaImage};
use imagery_core::Namespace;
use imagery_core::config::AppConfig;
use imagery_pipeline::{FetchResponse, HttpFetcher, ImageLibrary, PipelineResult};
use imagery_storage::MemoryBlobStore;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, Semaphore};

pub const NONE_URL: &str = "http://assets.test/none.png";
pub const LOADING_URL: &str = "http://assets.test/loading.png";
pub const SLOW_PREFIX: &str = "http://slow.test/";

/// Canned HTTP responses. Unknown URLs answer 404.
///
/// Requests for URLs under [`SLOW_PREFIX`] notify `started` and then wait for
/// a permit from `gate`.
pub struct MockFetcher {
    responses: Mutex<HashMap<String, (u16, Bytes)>>,
    calls: Mutex<Vec<String>>,
    pub gate: Semaphore,
    pub started: Notify,
}

impl MockFetcher {
    pub fn new() -> Self {
        let fetcher = Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            gate: Semaphore::new(0),
            started: Notify::new(),
        };
        fetcher.respond(NONE_URL, png([0, 0, 0, 255]));
        fetcher.respond(LOADING_URL, png([128, 128, 128, 255]));
        fetcher
    }

    pub fn respond(&self, url: &str, body: impl Into<Bytes>) {
        self.respond_with(url, 200, body);
    }

    pub fn respond_with(&self, url: &str, status: u16, body: impl Into<Bytes>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), (status, body.into()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls().iter().filter(|call| *call == url).count()
    }
}

#[async_trait]
impl HttpFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> PipelineResult<FetchResponse> {
        self.calls.lock().unwrap().push(url.to_string());
        if url.starts_with(SLOW_PREFIX) {
            self.started.notify_one();
            self.gate.acquire().await.unwrap().forget();
        }

        let response = self.responses.lock().unwrap().get(url).cloned();
        let (status, body) = response.unwrap_or((404, Bytes::new()));
        Ok(FetchResponse { status, body })
    }
}

/// A 2x2 PNG of a single colour.
pub fn png(colour: [u8; 4]) -> Bytes {
    let image = RgbaImage::from_pixel(2, 2, Rgba(colour));
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png).unwrap();
    Bytes::from(out.into_inner())
}

/// Test configuration rooted at `dir` with mock placeholder URLs.
pub fn test_config(dir: &Path) -> AppConfig {
    let mut config = AppConfig::for_testing();
    config.catalog.data_dir = dir.to_path_buf();
    config.library.placeholder_none_url = NONE_URL.to_string();
    config.library.placeholder_loading_url = LOADING_URL.to_string();
    config.sync.avatar_profile_url = "http://profiles.test/{user_id}?xml=1".to_string();
    config
}

pub struct Harness {
    pub library: ImageLibrary,
    pub store: Arc<MemoryBlobStore>,
    pub fetcher: Arc<MockFetcher>,
}

pub async fn build(config: AppConfig, store: Arc<MemoryBlobStore>, fetcher: Arc<MockFetcher>) -> Harness {
    let library = ImageLibrary::builder(config, store.clone())
        .fetcher(fetcher.clone())
        .build()
        .await;
    Harness {
        library,
        store,
        fetcher,
    }
}

/// Build, start and drain a library over a fresh memory store.
pub async fn started(dir: &Path) -> Harness {
    let store = Arc::new(MemoryBlobStore::new(Namespace::new(1)));
    let harness = build(test_config(dir), store, Arc::new(MockFetcher::new())).await;
    harness.library.start().await;
    harness.library.wait_idle().await;
    harness
}
