//! Blob storage abstraction and backends for imagery.
//!
//! This crate provides:
//! - Content-addressed image storage with atomic writes
//! - Records scoped by a host-assigned namespace
//! - Backends: local filesystem and in-process memory

pub mod backends;
pub mod error;
pub mod traits;

pub use backends::{filesystem::FilesystemBlobStore, memory::MemoryBlobStore};
pub use error::{StorageError, StorageResult};
pub use traits::{BlobKind, BlobStore};

use imagery_core::Namespace;
use imagery_core::config::StorageConfig;
use std::sync::Arc;

/// Create a blob store from configuration.
pub async fn from_config(config: &StorageConfig) -> StorageResult<Arc<dyn BlobStore>> {
    config.validate().map_err(StorageError::Config)?;

    match config {
        StorageConfig::Filesystem {
            path,
            namespace: Some(namespace),
        } => {
            let backend = FilesystemBlobStore::new(path, Namespace::new(*namespace)).await?;
            Ok(Arc::new(backend))
        }
        StorageConfig::Filesystem {
            path,
            namespace: None,
        } => {
            let backend = FilesystemBlobStore::open(path).await?;
            Ok(Arc::new(backend))
        }
        StorageConfig::Memory { namespace } => {
            Ok(Arc::new(MemoryBlobStore::new(Namespace::new(*namespace))))
        }
    }
}
