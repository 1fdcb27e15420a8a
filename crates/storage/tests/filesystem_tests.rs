// Filesystem backend behaviour under concurrent writers and namespace churn.

mod common;

use bytes::Bytes;
use common::seeded_bytes;
use imagery_core::Namespace;
use imagery_storage::{BlobKind, BlobStore, FilesystemBlobStore};
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::TempDir;

const NS: Namespace = Namespace::new(1001);

#[tokio::test]
async fn test_concurrent_identical_writes_converge() {
    let temp_dir = TempDir::new().unwrap();
    let backend = Arc::new(FilesystemBlobStore::new(temp_dir.path(), NS).await.unwrap());
    let data = seeded_bytes(7, 4096);

    let mut handles = Vec::new();
    for _ in 0..16 {
        let backend = backend.clone();
        let data = data.clone();
        handles.push(tokio::spawn(async move {
            backend.store(data, BlobKind::Png, NS).await.unwrap()
        }));
    }

    let mut refs = HashSet::new();
    for handle in handles {
        refs.insert(handle.await.unwrap());
    }

    assert_eq!(refs.len(), 1, "identical bytes must yield one reference");
    let listed = backend.list(BlobKind::Png, NS).await.unwrap();
    assert_eq!(listed.len(), 1);
    let content = refs.into_iter().next().unwrap();
    assert_eq!(
        backend.get(&content, BlobKind::Png, NS).await.unwrap(),
        Some(data)
    );
}

#[tokio::test]
async fn test_list_ignores_interrupted_temp_files() {
    let temp_dir = TempDir::new().unwrap();
    let backend = FilesystemBlobStore::new(temp_dir.path(), NS).await.unwrap();

    let content = backend
        .store(Bytes::from("complete"), BlobKind::Png, NS)
        .await
        .unwrap();

    let shard = &content.as_str()[..2];
    let stray = temp_dir
        .path()
        .join(NS.to_string())
        .join("png")
        .join(shard)
        .join(format!("{}.tmp.deadbeef", content.as_str()));
    std::fs::write(&stray, b"partial").unwrap();

    let listed = backend.list(BlobKind::Png, NS).await.unwrap();
    assert_eq!(listed, vec![content]);
}

#[tokio::test]
async fn test_purge_previous_namespace_after_restore() {
    let temp_dir = TempDir::new().unwrap();
    let old_ns = Namespace::new(1);
    let old = FilesystemBlobStore::new(temp_dir.path(), old_ns).await.unwrap();

    for seed in 0..5 {
        old.store(seeded_bytes(seed, 64), BlobKind::Png, old_ns)
            .await
            .unwrap();
    }
    old.store(seeded_bytes(99, 64), BlobKind::Jpg, old_ns)
        .await
        .unwrap();

    // Host assigns a new namespace; the old references are stale there.
    let new_ns = Namespace::new(2);
    let backend = FilesystemBlobStore::new(temp_dir.path(), new_ns).await.unwrap();
    let stale = old.list(BlobKind::Png, old_ns).await.unwrap();
    for content in &stale {
        assert!(!backend.exists(content, BlobKind::Png, new_ns).await.unwrap());
    }

    let removed = backend.purge_namespace(old_ns).await.unwrap();
    assert_eq!(removed, 6);
    assert!(backend.list(BlobKind::Png, old_ns).await.unwrap().is_empty());
    assert_eq!(backend.purge_namespace(old_ns).await.unwrap(), 0);
}

#[tokio::test]
async fn test_remove_reports_whether_record_existed() {
    let temp_dir = TempDir::new().unwrap();
    let backend = FilesystemBlobStore::new(temp_dir.path(), NS).await.unwrap();

    let content = backend
        .store(seeded_bytes(3, 128), BlobKind::Png, NS)
        .await
        .unwrap();

    assert!(backend.remove(&content, BlobKind::Png, NS).await.unwrap());
    assert!(!backend.remove(&content, BlobKind::Png, NS).await.unwrap());
    assert!(backend.get(&content, BlobKind::Png, NS).await.unwrap().is_none());
}

#[tokio::test]
async fn test_health_check_detects_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("blobs");
    let backend = FilesystemBlobStore::new(&root, NS).await.unwrap();
    backend.health_check().await.unwrap();

    std::fs::remove_dir_all(&root).unwrap();
    assert!(backend.health_check().await.is_err());
}
