//! Storage trait definitions.

use crate::error::StorageResult;
use async_trait::async_trait;
use bytes::Bytes;
use imagery_core::{ContentRef, Namespace};
use std::fmt;

/// Kind of blob being stored. Backends keep kinds apart, so the same
/// reference may exist once per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlobKind {
    Png,
    Jpg,
}

impl BlobKind {
    /// Short lowercase identifier, used in keys and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }
}

impl fmt::Display for BlobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content-addressed blob store whose records are scoped by namespace.
///
/// A reference returned by [`BlobStore::store`] can only be dereferenced
/// under the namespace it was stored in. Storing identical bytes twice in
/// the same namespace yields the same reference and a single record.
#[async_trait]
pub trait BlobStore: Send + Sync + 'static {
    /// The namespace the host currently assigns to this store.
    fn live_namespace(&self) -> Namespace;

    /// Store a blob and return its content reference.
    async fn store(
        &self,
        data: Bytes,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<ContentRef>;

    /// Read a blob. Returns `None` when no record exists.
    async fn get(
        &self,
        content: &ContentRef,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<Option<Bytes>>;

    /// Check whether a record exists.
    async fn exists(
        &self,
        content: &ContentRef,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<bool> {
        Ok(self.get(content, kind, namespace).await?.is_some())
    }

    /// Remove a record. Returns whether anything was removed.
    async fn remove(
        &self,
        content: &ContentRef,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<bool>;

    /// List every reference stored for a kind within a namespace.
    async fn list(&self, kind: BlobKind, namespace: Namespace) -> StorageResult<Vec<ContentRef>>;

    /// Drop every record stored under a namespace, of every kind.
    ///
    /// Returns the number of records removed.
    async fn purge_namespace(&self, namespace: Namespace) -> StorageResult<usize>;

    /// Get the name of this storage backend, for logging.
    fn backend_name(&self) -> &'static str;

    /// Verify the backend is reachable and usable.
    ///
    /// The default implementation returns Ok(()).
    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }
}
