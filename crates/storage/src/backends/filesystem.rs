//! Local filesystem blob store.
//!
//! Layout: `<root>/<namespace>/<kind>/<ref[..2]>/<ref>`. The live namespace is
//! either configured or recorded in `<root>/NAMESPACE`.

use crate::error::{StorageError, StorageResult};
use crate::traits::{BlobKind, BlobStore};
use async_trait::async_trait;
use bytes::Bytes;
use imagery_core::{ContentHash, ContentRef, Namespace};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::instrument;
use uuid::Uuid;

/// File in the storage root recording the live namespace.
pub const NAMESPACE_FILE: &str = "NAMESPACE";

/// Local filesystem blob store.
pub struct FilesystemBlobStore {
    root: PathBuf,
    namespace: Namespace,
}

impl FilesystemBlobStore {
    /// Open a store with an explicit live namespace.
    pub async fn new(root: impl AsRef<Path>, namespace: Namespace) -> StorageResult<Self> {
        if namespace.is_unset() {
            return Err(StorageError::Config(
                "live namespace must be non-zero".to_string(),
            ));
        }
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root, namespace })
    }

    /// Open a store whose live namespace is recorded in the root directory.
    ///
    /// A fresh random namespace is generated and recorded when none exists.
    pub async fn open(root: impl AsRef<Path>) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        let marker = root.join(NAMESPACE_FILE);

        let namespace = match fs::read_to_string(&marker).await {
            Ok(contents) => contents
                .parse::<Namespace>()
                .map_err(|e| StorageError::InvalidNamespace(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let namespace = Namespace::new(Uuid::new_v4().as_u64_pair().0.max(1));
                write_atomic(&marker, namespace.to_string().as_bytes()).await?;
                tracing::info!(namespace = %namespace, "Recorded new storage namespace");
                namespace
            }
            Err(e) => return Err(StorageError::Io(e)),
        };

        Self::new(root, namespace).await
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn namespace_dir(&self, namespace: Namespace) -> PathBuf {
        self.root.join(namespace.to_string())
    }

    fn kind_dir(&self, kind: BlobKind, namespace: Namespace) -> PathBuf {
        self.namespace_dir(namespace).join(kind.as_str())
    }

    /// Get the full path for a blob, with path traversal protection.
    ///
    /// Runs on the blocking pool because `canonicalize` and
    /// `symlink_metadata` hit the filesystem.
    async fn blob_path(
        &self,
        content: &ContentRef,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<PathBuf> {
        let reference = content.as_str();
        let shard = &reference[..reference.len().min(2)];
        let key = format!("{namespace}/{kind}/{shard}/{reference}");
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || Self::key_path_sync(&root, &key))
            .await
            .map_err(|e| {
                StorageError::Io(std::io::Error::other(format!("spawn_blocking failed: {e}")))
            })?
    }

    /// Synchronous key path validation.
    ///
    /// Returns an error if the key would escape the storage root, including
    /// through a symlink planted inside it.
    fn key_path_sync(root: &Path, key: &str) -> StorageResult<PathBuf> {
        if key.contains("..") || key.starts_with('/') || key.starts_with('\\') {
            return Err(StorageError::InvalidKey(format!(
                "path traversal not allowed: {key}"
            )));
        }

        for component in Path::new(key).components() {
            if !matches!(component, std::path::Component::Normal(_)) {
                return Err(StorageError::InvalidKey(format!(
                    "contains unsafe path component: {key}"
                )));
            }
        }

        let path = root.join(key);
        let root_canonical = root.canonicalize().map_err(|e| {
            StorageError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to canonicalize root: {e}"),
            ))
        })?;

        // Walk up to the nearest existing ancestor (or the path itself) and
        // make sure it resolves inside the root.
        let mut cursor = Some(path.as_path());
        while let Some(candidate) = cursor {
            match std::fs::symlink_metadata(candidate) {
                Ok(meta) => {
                    let canonical = candidate.canonicalize().map_err(|e| {
                        if meta.file_type().is_symlink() {
                            StorageError::InvalidKey(format!(
                                "symlink target missing or invalid: {key}"
                            ))
                        } else {
                            StorageError::Io(std::io::Error::new(
                                e.kind(),
                                format!("failed to canonicalize path: {e}"),
                            ))
                        }
                    })?;
                    if !canonical.starts_with(&root_canonical) {
                        return Err(StorageError::InvalidKey(format!(
                            "resolved path escapes storage root: {key}"
                        )));
                    }
                    break;
                }
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => {
                    return Err(StorageError::Io(std::io::Error::new(
                        err.kind(),
                        format!("failed to stat path: {err}"),
                    )));
                }
            }
            cursor = candidate.parent();
        }

        Ok(path)
    }

    async fn count_files(dir: &Path) -> StorageResult<usize> {
        let mut count = 0;
        let mut stack = vec![dir.to_path_buf()];
        while let Some(dir) = stack.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(StorageError::Io(e)),
            };
            while let Some(entry) = entries.next_entry().await? {
                // file_type() does not follow symlinks
                let file_type = entry.file_type().await?;
                if file_type.is_dir() {
                    stack.push(entry.path());
                } else if file_type.is_file() {
                    count += 1;
                }
            }
        }
        Ok(count)
    }
}

/// Write to a uniquely named temp file, fsync, then rename into place.
async fn write_atomic(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let temp_name = format!(".tmp.{}", Uuid::new_v4());
    let temp_path = path.with_file_name(
        path.file_name()
            .map(|n| format!("{}{}", n.to_string_lossy(), temp_name))
            .unwrap_or_else(|| temp_name.clone()),
    );
    {
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(data).await?;
        file.sync_all().await?;
    }
    fs::rename(&temp_path, path).await?;
    Ok(())
}

#[async_trait]
impl BlobStore for FilesystemBlobStore {
    fn live_namespace(&self) -> Namespace {
        self.namespace
    }

    #[instrument(skip(self, data), fields(backend = "filesystem", size = data.len()))]
    async fn store(
        &self,
        data: Bytes,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<ContentRef> {
        let content = ContentHash::compute(&data).to_content_ref();
        let path = self.blob_path(&content, kind, namespace).await?;

        // Same bytes, same reference: an existing record is already correct.
        if fs::try_exists(&path).await? {
            return Ok(content);
        }

        write_atomic(&path, &data).await?;
        Ok(content)
    }

    #[instrument(skip(self), fields(backend = "filesystem"))]
    async fn get(
        &self,
        content: &ContentRef,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<Option<Bytes>> {
        let path = self.blob_path(content, kind, namespace).await?;
        match fs::read(&path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    #[instrument(skip(self), fields(backend = "filesystem"))]
    async fn exists(
        &self,
        content: &ContentRef,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<bool> {
        let path = self.blob_path(content, kind, namespace).await?;
        fs::try_exists(&path).await.map_err(StorageError::Io)
    }

    #[instrument(skip(self), fields(backend = "filesystem"))]
    async fn remove(
        &self,
        content: &ContentRef,
        kind: BlobKind,
        namespace: Namespace,
    ) -> StorageResult<bool> {
        let path = self.blob_path(content, kind, namespace).await?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    #[instrument(skip(self), fields(backend = "filesystem"))]
    async fn list(&self, kind: BlobKind, namespace: Namespace) -> StorageResult<Vec<ContentRef>> {
        let base = self.kind_dir(kind, namespace);
        let mut results = Vec::new();

        let mut shards = match fs::read_dir(&base).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(results),
            Err(e) => return Err(StorageError::Io(e)),
        };

        while let Some(shard) = shards.next_entry().await? {
            if !shard.file_type().await?.is_dir() {
                continue;
            }
            let mut entries = fs::read_dir(shard.path()).await?;
            while let Some(entry) = entries.next_entry().await? {
                if !entry.file_type().await?.is_file() {
                    continue;
                }
                // Temp files from interrupted writes fail validation and are skipped.
                if let Ok(content) = ContentRef::new(entry.file_name().to_string_lossy()) {
                    results.push(content);
                }
            }
        }

        results.sort();
        Ok(results)
    }

    #[instrument(skip(self), fields(backend = "filesystem"))]
    async fn purge_namespace(&self, namespace: Namespace) -> StorageResult<usize> {
        let dir = self.namespace_dir(namespace);
        if !fs::try_exists(&dir).await? {
            return Ok(0);
        }

        let removed = Self::count_files(&dir).await?;
        fs::remove_dir_all(&dir).await?;
        tracing::debug!(namespace = %namespace, removed, "Purged namespace directory");
        Ok(removed)
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }

    #[instrument(skip(self), fields(backend = "filesystem"))]
    async fn health_check(&self) -> StorageResult<()> {
        let metadata = fs::metadata(&self.root).await.map_err(|e| {
            StorageError::Io(std::io::Error::new(
                e.kind(),
                format!("storage root not accessible: {e}"),
            ))
        })?;

        if !metadata.is_dir() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                format!("storage root is not a directory: {:?}", self.root),
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: Namespace = Namespace::new(42);

    #[tokio::test]
    async fn test_store_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemBlobStore::new(dir.path(), NS).await.unwrap();

        let data = Bytes::from("hello world");
        let content = store.store(data.clone(), BlobKind::Png, NS).await.unwrap();

        assert!(store.exists(&content, BlobKind::Png, NS).await.unwrap());
        let retrieved = store.get(&content, BlobKind::Png, NS).await.unwrap();
        assert_eq!(retrieved, Some(data));
    }

    #[tokio::test]
    async fn test_records_are_namespace_scoped() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemBlobStore::new(dir.path(), NS).await.unwrap();

        let content = store
            .store(Bytes::from("scoped"), BlobKind::Png, NS)
            .await
            .unwrap();
        let other = Namespace::new(43);

        assert!(store.get(&content, BlobKind::Png, other).await.unwrap().is_none());
        assert!(!store.exists(&content, BlobKind::Jpg, NS).await.unwrap());
    }

    #[tokio::test]
    async fn test_open_records_and_reuses_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let first = FilesystemBlobStore::open(dir.path()).await.unwrap();
        let second = FilesystemBlobStore::open(dir.path()).await.unwrap();

        assert!(!first.live_namespace().is_unset());
        assert_eq!(first.live_namespace(), second.live_namespace());
    }

    #[tokio::test]
    async fn test_open_rejects_corrupt_namespace_record() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(NAMESPACE_FILE), "not-a-number").unwrap();

        match FilesystemBlobStore::open(dir.path()).await {
            Err(StorageError::InvalidNamespace(_)) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("expected error"),
        }
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_symlinked_namespace_rejected() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        let store = FilesystemBlobStore::new(dir.path(), NS).await.unwrap();

        symlink(outside.path(), dir.path().join(NS.to_string())).unwrap();

        let result = store.store(Bytes::from("data"), BlobKind::Png, NS).await;
        match result {
            Err(StorageError::InvalidKey(msg)) => {
                assert!(msg.contains("escapes storage root"), "unexpected message: {msg}");
            }
            other => panic!("expected InvalidKey error, got: {other:?}"),
        }
        assert!(
            std::fs::read_dir(outside.path()).unwrap().next().is_none(),
            "nothing should be written outside the storage root"
        );
    }
}
