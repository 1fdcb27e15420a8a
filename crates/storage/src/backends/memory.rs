//! In-process blob store.
//!
//! Nothing survives the process. The live namespace can be changed at
//! runtime, which is how tests simulate the host assigning a new one.

use crate::error::StorageResult;
use crate::traits::{BlobKind, BlobStore};
use async_trait::async_trait;
use bytes::Bytes;
use imagery_core::{ContentHash, ContentRef, Namespace};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

type RecordKey = (Namespace, BlobKind, ContentRef);

/// In-memory blob store.
#[derive(Default)]
pub struct MemoryBlobStore {
    namespace: AtomicU64,
    records: RwLock<HashMap<RecordKey, Bytes>>,
    writes: AtomicUsize,
}

impl MemoryBlobStore {
    /// Create an empty store with the given live namespace.
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace: AtomicU64::new(namespace.get()),
            records: RwLock::new(HashMap::new()),
            writes: AtomicUsize::new(0),
        }
    }

    /// Change the live namespace. Existing records stay where they are.
    pub fn set_live_namespace(&self, namespace: Namespace) {
        self.namespace.store(namespace.get(), Ordering::SeqCst);
    }

    /// Number of records currently held, across every namespace.
    pub fn record_count(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Number of records held under one namespace.
    pub fn records_in(&self, namespace: Namespace) -> usize {
        self.records
            .read()
            .map(|r| r.keys().filter(|(ns, _, _)| *ns == namespace).count())
            .unwrap_or(0)
    }

    /// Number of store calls that created a new record.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn live_namespace(&self) -> Namespace {
        Namespace::new(self.namespace.load(Ordering::SeqCst))
    }

    async fn store(
        &self,
        data: Bytes,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<ContentRef> {
        let content = ContentHash::compute(&data).to_content_ref();
        let mut records = self
            .records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if records
            .insert((namespace, kind, content.clone()), data)
            .is_none()
        {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(content)
    }

    async fn get(
        &self,
        content: &ContentRef,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<Option<Bytes>> {
        let records = self
            .records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(records.get(&(namespace, kind, content.clone())).cloned())
    }

    async fn remove(
        &self,
        content: &ContentRef,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<bool> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(records.remove(&(namespace, kind, content.clone())).is_some())
    }

    async fn list(&self, kind: BlobKind, namespace: Namespace) -> StorageResult<Vec<ContentRef>> {
        let records = self
            .records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut refs: Vec<ContentRef> = records
            .keys()
            .filter(|(ns, k, _)| *ns == namespace && *k == kind)
            .map(|(_, _, content)| content.clone())
            .collect();
        refs.sort();
        Ok(refs)
    }

    async fn purge_namespace(&self, namespace: Namespace) -> StorageResult<usize> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = records.len();
        records.retain(|(ns, _, _), _| *ns != namespace);
        Ok(before - records.len())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
