//! The public image library.

use crate::avatar::extract_avatar_url;
use crate::batch::spawn_drain;
use crate::codec::{ImageCodec, PngCodec};
use crate::fetch::{HttpFetcher, ReqwestFetcher, fetch_success};
use crate::items::{ItemDirectory, StaticItemDirectory};
use crate::migration::{self, MigrationPlan};
use crate::resolver::{self, Resolution, SourceUrl};
use crate::state::{PipelineState, Shared};
use crate::sync::{CatalogEntry, CommunityCatalog, HttpCommunityCatalog, RemoteCatalogSync};
use bytes::Bytes;
use futures::StreamExt;
use futures::stream;
use imagery_catalog::CatalogStore;
use imagery_core::config::AppConfig;
use imagery_core::{ContentRef, ImageMetadata, LoadItem, LoadOrder, LogicalKey, Namespace};
use imagery_storage::{BlobKind, BlobStore};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

const EXISTS_CHECK_CONCURRENCY: usize = 16;

/// Outcome of a remote catalog sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Entries written from the item schema.
    pub schema_entries: usize,
    /// Entries written from the community catalog.
    pub community_entries: usize,
    /// False if a phase failed and the sync stopped early.
    pub completed: bool,
}

/// Snapshot of the library's tables and queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryStatus {
    pub namespace: Namespace,
    pub live_namespace: Namespace,
    pub backend: &'static str,
    pub identifiers: usize,
    pub urls: usize,
    pub metadata: usize,
    pub pending_orders: usize,
    pub batch_active: bool,
}

/// Configures and opens an [`ImageLibrary`].
pub struct LibraryBuilder {
    config: AppConfig,
    store: Arc<dyn BlobStore>,
    fetcher: Option<Arc<dyn HttpFetcher>>,
    codec: Option<Arc<dyn ImageCodec>>,
    items: Option<Arc<dyn ItemDirectory>>,
    community: Option<Arc<dyn CommunityCatalog>>,
}

impl LibraryBuilder {
    pub fn fetcher(mut self, fetcher: Arc<dyn HttpFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn codec(mut self, codec: Arc<dyn ImageCodec>) -> Self {
        self.codec = Some(codec);
        self
    }

    pub fn items(mut self, items: Arc<dyn ItemDirectory>) -> Self {
        self.items = Some(items);
        self
    }

    /// Override the community catalog. By default one is created from
    /// `sync.workshop_url` when that is set.
    pub fn community(mut self, community: Arc<dyn CommunityCatalog>) -> Self {
        self.community = Some(community);
        self
    }

    /// Load the persisted tables and assemble the library.
    ///
    /// The queue stays held until [`ImageLibrary::start`] runs.
    pub async fn build(self) -> ImageLibrary {
        let fetcher = self
            .fetcher
            .unwrap_or_else(|| Arc::new(ReqwestFetcher::new()) as Arc<dyn HttpFetcher>);
        let codec = self
            .codec
            .unwrap_or_else(|| Arc::new(PngCodec) as Arc<dyn ImageCodec>);
        let items = self
            .items
            .unwrap_or_else(|| Arc::new(StaticItemDirectory::default()) as Arc<dyn ItemDirectory>);
        let community = self.community.or_else(|| {
            self.config.sync.workshop_url.as_ref().map(|url| {
                Arc::new(HttpCommunityCatalog::new(
                    Arc::clone(&fetcher),
                    url.clone(),
                    self.config.sync.workshop_tags.clone(),
                )) as Arc<dyn CommunityCatalog>
            })
        });

        let catalog_store = CatalogStore::new(self.config.catalog.data_dir.clone());
        let catalog = catalog_store.load().await;
        let (idle, _) = watch::channel(true);

        let sync = RemoteCatalogSync::new(
            Arc::clone(&fetcher),
            items,
            community,
            self.config.sync.clone(),
        );

        let shared = Arc::new(Shared {
            state: Mutex::new(PipelineState {
                catalog,
                ..PipelineState::default()
            }),
            store: self.store,
            fetcher,
            codec,
            catalog_store,
            sync,
            library: self.config.library,
            sync_config: self.config.sync,
            idle,
        });

        ImageLibrary { shared }
    }
}

/// Resolves logical image keys to stored blobs, acquiring them on demand.
///
/// Cheap to clone; clones share the same tables, queue and background tasks.
/// None of the methods return errors: failures are logged and surface as
/// placeholders, `false` or absent values.
#[derive(Clone)]
pub struct ImageLibrary {
    shared: Arc<Shared>,
}

impl ImageLibrary {
    pub fn builder(config: AppConfig, store: Arc<dyn BlobStore>) -> LibraryBuilder {
        LibraryBuilder {
            config,
            store,
            fetcher: None,
            codec: None,
            items: None,
            community: None,
        }
    }

    // Lifecycle

    /// Reconcile the identifier table with the live namespace and release
    /// the queue. Only the first call does anything.
    pub async fn start(&self) -> MigrationPlan {
        let live = self.shared.store.live_namespace();
        let planned = {
            let state = self.shared.state.lock().await;
            if state.queue.is_released() {
                tracing::warn!("Image library already started");
                return MigrationPlan::Current;
            }
            migration::plan(&state.catalog, live)
        };

        match planned {
            MigrationPlan::FreshInit => {
                tracing::info!(namespace = %live, "Initializing image catalog");
                self.reinitialize(live).await;
            }
            MigrationPlan::Restore { previous } => self.restore(previous, live).await,
            MigrationPlan::Current => {
                tracing::info!(namespace = %live, "Image catalog is current");
            }
        }

        {
            let mut state = self.shared.state.lock().await;
            if state.queue.release() {
                spawn_drain(&self.shared);
            }
            self.shared.publish_idle(&state);
        }

        if planned == MigrationPlan::FreshInit && self.shared.sync_config.enabled {
            self.spawn_sync();
        }
        planned
    }

    /// Persist every table.
    pub async fn shutdown(&self) {
        let state = self.shared.state.lock().await;
        if let Err(e) = self.shared.catalog_store.save_all(&state.catalog).await {
            tracing::warn!(error = %e, "Failed to persist catalog on shutdown");
        }
    }

    async fn reinitialize(&self, live: Namespace) {
        let mut state = self.shared.state.lock().await;
        state.catalog.clear_identifiers();
        state.catalog.set_namespace(live);
        for order in migration::fresh_init_orders(&self.shared.library)
            .into_iter()
            .rev()
        {
            state.queue.enqueue_front(order);
        }
        self.shared.persist_identifiers(&state.catalog).await;
        self.shared.publish_idle(&state);
        self.shared.kick(&state);
    }

    async fn restore(&self, previous: Namespace, live: Namespace) {
        tracing::warn!(
            previous = %previous,
            live = %live,
            "Storage namespace changed; stored images will be re-stored under the new namespace"
        );

        let entries: Vec<(LogicalKey, ContentRef)> = {
            let state = self.shared.state.lock().await;
            state
                .catalog
                .identifiers()
                .map(|(key, content)| (key.clone(), content.clone()))
                .collect()
        };
        let store = self.shared.store.as_ref();
        let restoration = migration::collect_restoration(entries, store, previous).await;

        match store.purge_namespace(previous).await {
            Ok(removed) => {
                tracing::info!(namespace = %previous, removed, "Purged previous namespace")
            }
            Err(e) => {
                tracing::warn!(namespace = %previous, error = %e, "Failed to purge previous namespace")
            }
        }

        let restored = restoration.restored();
        let failed = restoration.failed.len();
        let mut state = self.shared.state.lock().await;
        for key in &restoration.failed {
            state.catalog.remove_identifier(key);
        }
        if restored > 0 {
            state.queue.enqueue_front(restoration.order);
        }
        state.catalog.set_namespace(live);
        self.shared.persist_identifiers(&state.catalog).await;
        self.shared.publish_idle(&state);
        tracing::warn!("{restored} images queued for restoration, {failed} images failed");
        let missing = migration::missing_placeholders(&state.catalog);
        if !missing.is_empty() {
            tracing::warn!(
                missing = ?missing,
                "Placeholder images could not be restored; run a refresh to download them again"
            );
        }
    }

    // Acquisition

    /// Queue an image for download under `name_variant`.
    pub async fn add_image(&self, url: &str, name: &str, variant: u64) -> bool {
        let key = LogicalKey::new(name, variant);
        let order = LoadOrder::silent(name, vec![LoadItem::url(key, url)]);
        let mut state = self.shared.state.lock().await;
        self.shared.enqueue(&mut state, order);
        true
    }

    /// Queue raw bytes to be stored as-is under `name_variant`.
    pub async fn add_image_data(&self, name: &str, data: impl Into<Bytes>, variant: u64) -> bool {
        let key = LogicalKey::new(name, variant);
        let order = LoadOrder::silent(name, vec![LoadItem::bytes(key, data)]);
        let mut state = self.shared.state.lock().await;
        self.shared.enqueue(&mut state, order);
        true
    }

    /// Queue one order for every `name -> url` pair under a single variant.
    ///
    /// Unless `overwrite` is set, keys already stored are skipped. The URLs
    /// are recorded in the URL table.
    pub async fn import_bulk(
        &self,
        label: &str,
        mapping: impl IntoIterator<Item = (String, String)>,
        variant: u64,
        overwrite: bool,
    ) {
        let entries = mapping
            .into_iter()
            .map(|(name, url)| (LogicalKey::new(name, variant), url))
            .collect();
        self.import_urls(label, entries, overwrite).await;
    }

    /// Like [`ImageLibrary::import_bulk`], with a `variant -> url` map per name.
    pub async fn import_item_list(
        &self,
        label: &str,
        items: impl IntoIterator<Item = (String, BTreeMap<u64, String>)>,
        overwrite: bool,
    ) {
        let entries = items
            .into_iter()
            .flat_map(|(name, variants)| {
                variants
                    .into_iter()
                    .map(move |(variant, url)| (LogicalKey::new(name.clone(), variant), url))
            })
            .collect();
        self.import_urls(label, entries, overwrite).await;
    }

    /// Queue raw images for every `name -> bytes` pair under a single variant.
    pub async fn import_image_data(
        &self,
        label: &str,
        images: impl IntoIterator<Item = (String, Bytes)>,
        variant: u64,
        overwrite: bool,
    ) {
        let entries: Vec<(LogicalKey, Bytes)> = images
            .into_iter()
            .map(|(name, data)| (LogicalKey::new(name, variant), data))
            .collect();
        let pending = self.retain_unstored(entries, overwrite).await;
        if pending.is_empty() {
            return;
        }

        let items = pending
            .into_iter()
            .map(|(key, data)| LoadItem::bytes(key, data))
            .collect();
        let mut state = self.shared.state.lock().await;
        self.shared.enqueue(&mut state, LoadOrder::new(label, items));
    }

    /// Queue every listed key that has a known URL but is not stored yet.
    pub async fn load_image_list(
        &self,
        label: &str,
        keys: impl IntoIterator<Item = (String, u64)>,
    ) {
        let entries: Vec<(LogicalKey, ())> = keys
            .into_iter()
            .map(|(name, variant)| (LogicalKey::new(name, variant), ()))
            .collect();
        let pending = self.retain_unstored(entries, false).await;

        let mut state = self.shared.state.lock().await;
        let items: Vec<LoadItem> = pending
            .into_iter()
            .filter_map(|(key, ())| {
                let url = state.catalog.url(&key)?.to_string();
                Some(LoadItem::url(key, url))
            })
            .collect();
        if !items.is_empty() {
            self.shared.enqueue(&mut state, LoadOrder::new(label, items));
        }
    }

    async fn import_urls(&self, label: &str, entries: Vec<(LogicalKey, String)>, overwrite: bool) {
        let pending = self.retain_unstored(entries, overwrite).await;
        if pending.is_empty() {
            return;
        }

        let mut state = self.shared.state.lock().await;
        let mut items = Vec::with_capacity(pending.len());
        for (key, url) in pending {
            state.catalog.set_url(key.clone(), url.clone());
            items.push(LoadItem::url(key, url));
        }
        self.shared.enqueue(&mut state, LoadOrder::new(label, items));
    }

    /// Drop entries whose key is already stored, unless `overwrite` is set.
    async fn retain_unstored<T>(
        &self,
        entries: Vec<(LogicalKey, T)>,
        overwrite: bool,
    ) -> Vec<(LogicalKey, T)> {
        if overwrite {
            return entries;
        }

        let references: Vec<Option<ContentRef>> = {
            let state = self.shared.state.lock().await;
            entries
                .iter()
                .map(|(key, _)| state.catalog.identifier(key).cloned())
                .collect()
        };

        let this = self;
        let stored: Vec<bool> = stream::iter(references)
            .map(|reference| async move {
                match reference {
                    Some(content) => this.blob_exists(&content).await,
                    None => false,
                }
            })
            .buffered(EXISTS_CHECK_CONCURRENCY)
            .collect()
            .await;

        entries
            .into_iter()
            .zip(stored)
            .filter(|(_, stored)| !stored)
            .map(|(entry, _)| entry)
            .collect()
    }

    // Lookup

    /// Resolve a key, queueing a download if only its URL is known.
    pub async fn resolve(&self, name: &str, variant: u64) -> Resolution {
        let key = LogicalKey::new(name, variant);
        let mut state = self.shared.state.lock().await;
        resolver::resolve(&self.shared, &mut state, &key)
    }

    /// Reference for a key, or the `LOADING_0`/`NONE_0` placeholder.
    ///
    /// Never waits for a download. Returns `None` only while the needed
    /// placeholder itself is not stored yet.
    pub async fn get_image_reference(&self, name: &str, variant: u64) -> Option<ContentRef> {
        let key = LogicalKey::new(name, variant);
        let mut state = self.shared.state.lock().await;
        let resolution = resolver::resolve(&self.shared, &mut state, &key);
        resolver::reference_for(&state.catalog, resolution)
    }

    pub async fn get_source_url(&self, name: &str, variant: u64) -> SourceUrl {
        let key = LogicalKey::new(name, variant);
        let state = self.shared.state.lock().await;
        resolver::source_url(&state.catalog, &key)
    }

    /// Every variant id with a known URL for `name`.
    pub async fn list_variant_ids(&self, name: &str) -> BTreeSet<u64> {
        self.shared.state.lock().await.catalog.variant_ids(name)
    }

    pub async fn get_metadata(&self, name: &str, variant: u64) -> Option<ImageMetadata> {
        let key = LogicalKey::new(name, variant);
        self.shared.state.lock().await.catalog.metadata(&key).cloned()
    }

    /// True if the key has a reference and the blob exists under the live
    /// namespace. A dangling reference reads as absent and is left in place.
    pub async fn has_image(&self, name: &str, variant: u64) -> bool {
        let key = LogicalKey::new(name, variant);
        let content = self.shared.state.lock().await.catalog.identifier(&key).cloned();
        match content {
            Some(content) => self.blob_exists(&content).await,
            None => false,
        }
    }

    /// Remove a stored image and its identifier entry.
    ///
    /// The blob is kept while another key still references the same content.
    /// Placeholders cannot be removed.
    pub async fn remove_image(&self, name: &str, variant: u64) -> bool {
        let key = LogicalKey::new(name, variant);
        if key.is_placeholder() {
            tracing::warn!(key = %key, "Refusing to remove a placeholder image");
            return false;
        }
        if !self.has_image(name, variant).await {
            return false;
        }

        let mut state = self.shared.state.lock().await;
        let Some(content) = state.catalog.remove_identifier(&key) else {
            return false;
        };
        let shared = state
            .catalog
            .identifiers()
            .any(|(_, other)| *other == content);
        if !shared {
            let live = self.shared.store.live_namespace();
            if let Err(e) = self.shared.store.remove(&content, BlobKind::Png, live).await {
                tracing::warn!(key = %key, error = %e, "Failed to remove image blob");
            }
        }
        self.shared.persist_identifiers(&state.catalog).await;
        tracing::debug!(key = %key, "Image removed");
        true
    }

    /// Fetch and queue a player's avatar under `user_id_0`.
    ///
    /// Does nothing when avatars are disabled or the avatar is already stored.
    pub async fn fetch_player_avatar(&self, user_id: &str) -> bool {
        if !self.shared.library.store_avatars
            || user_id.is_empty()
            || self.has_image(user_id, 0).await
        {
            return false;
        }

        let url = self.shared.sync_config.avatar_url_for(user_id);
        let body = match fetch_success(self.shared.fetcher.as_ref(), &url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(user_id, error = %e, "Avatar profile lookup failed");
                return false;
            }
        };

        match extract_avatar_url(&String::from_utf8_lossy(&body)) {
            Some(avatar) => self.add_image(&avatar, user_id, 0).await,
            None => {
                tracing::debug!(user_id, "Profile document has no avatar");
                false
            }
        }
    }

    async fn blob_exists(&self, content: &ContentRef) -> bool {
        let live = self.shared.store.live_namespace();
        match self.shared.store.exists(content, BlobKind::Png, live).await {
            Ok(exists) => exists,
            Err(e) => {
                tracing::warn!(content = %content.as_str(), error = %e, "Blob existence check failed");
                false
            }
        }
    }

    // Queue state

    /// Queue empty and no batch active.
    pub async fn is_idle(&self) -> bool {
        self.shared.state.lock().await.queue.is_idle()
    }

    /// Wait until the queue is idle.
    pub async fn wait_idle(&self) {
        let mut idle = self.shared.idle.subscribe();
        let _ = idle.wait_for(|idle| *idle).await;
    }

    pub async fn status(&self) -> LibraryStatus {
        let state = self.shared.state.lock().await;
        LibraryStatus {
            namespace: state.catalog.namespace(),
            live_namespace: self.shared.store.live_namespace(),
            backend: self.shared.store.backend_name(),
            identifiers: state.catalog.identifier_count(),
            urls: state.catalog.url_count(),
            metadata: state.catalog.metadata_count(),
            pending_orders: state.queue.pending_orders(),
            batch_active: state.queue.is_batch_active(),
        }
    }

    // Administration

    /// Run both remote catalog phases now, then kick the queue.
    pub async fn sync_remote_catalog(&self) -> SyncReport {
        run_sync(&self.shared).await
    }

    /// Drop every pending order and abandon the active batch.
    ///
    /// Images stored before the call stay stored.
    pub async fn cancel_pending(&self) -> bool {
        let mut state = self.shared.state.lock().await;
        if state.queue.is_idle() {
            tracing::warn!("No images are currently being downloaded");
            return false;
        }
        let dropped = state.queue.clear();
        self.shared.publish_idle(&state);
        tracing::warn!(dropped_orders = dropped, "Pending image downloads have been cancelled");
        true
    }

    /// Wipe the identifier table and rebuild it from scratch: placeholders,
    /// user images, then a full remote catalog sync.
    pub async fn refresh_imagery(&self) {
        tracing::warn!("Wiping image catalog; every registered image will be downloaded again");
        let live = self.shared.store.live_namespace();
        self.reinitialize(live).await;
        if self.shared.sync_config.enabled {
            self.spawn_sync();
        }
    }

    fn spawn_sync(&self) {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            run_sync(&shared).await;
        });
    }
}

async fn run_sync(shared: &Arc<Shared>) -> SyncReport {
    let mut report = SyncReport::default();

    match shared.sync.fetch_schema().await {
        Ok(entries) => report.schema_entries = apply_entries(shared, entries).await,
        Err(e) => {
            tracing::warn!(error = %e, "Item schema sync failed");
            shared.kick(&*shared.state.lock().await);
            return report;
        }
    }

    if shared.sync.community_enabled() {
        match shared.sync.fetch_community().await {
            Ok(entries) => report.community_entries = apply_entries(shared, entries).await,
            Err(e) => {
                tracing::warn!(error = %e, "Community catalog sync failed");
                shared.kick(&*shared.state.lock().await);
                return report;
            }
        }
    }

    report.completed = true;
    shared.kick(&*shared.state.lock().await);
    report
}

/// Write entries to the URL and metadata tables and flush both.
async fn apply_entries(shared: &Shared, entries: Vec<CatalogEntry>) -> usize {
    let count = entries.len();
    let mut state = shared.state.lock().await;
    for entry in entries {
        state.catalog.set_url(entry.key.clone(), entry.url);
        state.catalog.set_metadata(entry.key, entry.metadata);
    }
    shared.persist_urls_and_metadata(&state.catalog).await;
    count
}

impl std::fmt::Debug for ImageLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLibrary")
            .field("backend", &self.shared.store.backend_name())
            .finish_non_exhaustive()
    }
}
