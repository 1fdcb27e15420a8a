//! Shared pipeline state.

use crate::codec::ImageCodec;
use crate::fetch::HttpFetcher;
use crate::queue::LoadOrderQueue;
use crate::sync::RemoteCatalogSync;
use imagery_catalog::{Catalog, CatalogStore};
use imagery_core::LoadOrder;
use imagery_core::config::{LibraryConfig, SyncConfig};
use imagery_storage::BlobStore;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

/// Tables and queue, guarded together so a batch's writes and the queue's
/// flags never disagree.
#[derive(Debug, Default)]
pub(crate) struct PipelineState {
    pub catalog: Catalog,
    pub queue: LoadOrderQueue,
}

/// Everything the library and its background tasks share.
pub(crate) struct Shared {
    pub state: Mutex<PipelineState>,
    pub store: Arc<dyn BlobStore>,
    pub fetcher: Arc<dyn HttpFetcher>,
    pub codec: Arc<dyn ImageCodec>,
    pub catalog_store: CatalogStore,
    pub sync: RemoteCatalogSync,
    pub library: LibraryConfig,
    pub sync_config: SyncConfig,
    pub idle: watch::Sender<bool>,
}

impl Shared {
    /// Publish the queue's idle state to waiters.
    pub fn publish_idle(&self, state: &PipelineState) {
        self.idle.send_replace(state.queue.is_idle());
    }

    /// Enqueue an order and start a drain if nothing is running.
    pub fn enqueue(self: &Arc<Self>, state: &mut PipelineState, order: LoadOrder) {
        tracing::debug!(label = %order.label, items = order.len(), "Load order queued");
        let kick = state.queue.enqueue(order);
        self.publish_idle(state);
        if kick {
            crate::batch::spawn_drain(self);
        }
    }

    /// Start a drain if orders are pending and no batch is active.
    pub fn kick(self: &Arc<Self>, state: &PipelineState) {
        if state.queue.is_released() && !state.queue.is_batch_active() && !state.queue.is_idle() {
            crate::batch::spawn_drain(self);
        }
    }

    pub async fn persist_identifiers(&self, catalog: &Catalog) {
        if let Err(e) = self.catalog_store.save_identifiers(catalog).await {
            tracing::warn!(error = %e, "Failed to persist identifier table");
        }
    }

    pub async fn persist_urls_and_metadata(&self, catalog: &Catalog) {
        if let Err(e) = self.catalog_store.save_urls(catalog).await {
            tracing::warn!(error = %e, "Failed to persist URL table");
        }
        if let Err(e) = self.catalog_store.save_metadata(catalog).await {
            tracing::warn!(error = %e, "Failed to persist metadata table");
        }
    }
}
