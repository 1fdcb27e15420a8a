mod common;

use bytes::Bytes;
use common::{MockFetcher, build, test_config};
use imagery_core::Namespace;
use imagery_pipeline::MigrationPlan;
use imagery_storage::{BlobKind, BlobStore, MemoryBlobStore};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_restart_on_same_namespace_is_current() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryBlobStore::new(Namespace::new(1)));

    let first = build(test_config(dir.path()), store.clone(), Arc::new(MockFetcher::new())).await;
    first.library.start().await;
    first.library.wait_idle().await;
    first.library.shutdown().await;

    let second = build(test_config(dir.path()), store.clone(), Arc::new(MockFetcher::new())).await;
    assert_eq!(second.library.start().await, MigrationPlan::Current);
    second.library.wait_idle().await;

    assert!(second.fetcher.calls().is_empty());
    assert!(second.library.has_image("NONE", 0).await);
}

#[tokio::test]
async fn test_namespace_change_restores_readable_entries() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryBlobStore::new(Namespace::new(1)));

    let first = build(test_config(dir.path()), store.clone(), Arc::new(MockFetcher::new())).await;
    first.library.start().await;
    first
        .library
        .add_image_data("kept", Bytes::from_static(b"kept image"), 3)
        .await;
    first
        .library
        .add_image_data("lost", Bytes::from_static(b"lost image"), 3)
        .await;
    first.library.wait_idle().await;
    first.library.shutdown().await;
    assert_eq!(first.library.status().await.identifiers, 4);

    // One blob disappears before the host moves to a new namespace.
    let lost = first.library.get_image_reference("lost", 3).await.unwrap();
    store
        .remove(&lost, BlobKind::Png, Namespace::new(1))
        .await
        .unwrap();
    store.set_live_namespace(Namespace::new(2));

    let second = build(test_config(dir.path()), store.clone(), Arc::new(MockFetcher::new())).await;
    assert_eq!(
        second.library.start().await,
        MigrationPlan::Restore {
            previous: Namespace::new(1)
        }
    );
    second.library.wait_idle().await;

    let status = second.library.status().await;
    assert_eq!(status.namespace, Namespace::new(2));
    assert_eq!(status.identifiers, 3);
    assert!(second.library.has_image("kept", 3).await);
    assert!(second.library.has_image("NONE", 0).await);
    assert!(second.library.has_image("LOADING", 0).await);
    assert!(!second.library.has_image("lost", 3).await);

    assert_eq!(store.records_in(Namespace::new(1)), 0);
    assert_eq!(store.records_in(Namespace::new(2)), 3);
    // Restored from stored bytes, nothing downloaded.
    assert!(second.fetcher.calls().is_empty());

    // The new marker is durable.
    let third = build(test_config(dir.path()), store.clone(), Arc::new(MockFetcher::new())).await;
    assert_eq!(third.library.start().await, MigrationPlan::Current);
}

#[tokio::test]
async fn test_unreadable_previous_namespace_loses_placeholders_until_refresh() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryBlobStore::new(Namespace::new(1)));

    let first = build(test_config(dir.path()), store.clone(), Arc::new(MockFetcher::new())).await;
    first.library.start().await;
    first.library.wait_idle().await;
    first.library.shutdown().await;

    store.purge_namespace(Namespace::new(1)).await.unwrap();
    store.set_live_namespace(Namespace::new(2));

    let second = build(test_config(dir.path()), store.clone(), Arc::new(MockFetcher::new())).await;
    assert!(matches!(
        second.library.start().await,
        MigrationPlan::Restore { .. }
    ));
    second.library.wait_idle().await;

    assert_eq!(second.library.status().await.identifiers, 0);
    assert!(!second.library.has_image("NONE", 0).await);

    second.library.refresh_imagery().await;
    second.library.wait_idle().await;
    assert!(second.library.has_image("NONE", 0).await);
    assert!(second.library.has_image("LOADING", 0).await);
}

#[tokio::test]
async fn test_corrupt_identifier_document_starts_fresh() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("image_data.json"), "{ not json").unwrap();
    let store = Arc::new(MemoryBlobStore::new(Namespace::new(1)));

    let h = build(test_config(dir.path()), store, Arc::new(MockFetcher::new())).await;
    assert_eq!(h.library.start().await, MigrationPlan::FreshInit);
    h.library.wait_idle().await;

    assert_eq!(h.library.status().await.identifiers, 2);
    let saved = std::fs::read_to_string(dir.path().join("image_data.json")).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&saved).is_ok());
}

#[tokio::test]
async fn test_orders_queued_before_start_run_after_initialization() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryBlobStore::new(Namespace::new(1)));
    let h = build(test_config(dir.path()), store, Arc::new(MockFetcher::new())).await;

    h.library
        .add_image_data("early", Bytes::from_static(b"early bird"), 0)
        .await;
    assert!(!h.library.has_image("early", 0).await);

    h.library.start().await;
    h.library.wait_idle().await;

    assert!(h.library.has_image("early", 0).await);
    assert_eq!(h.library.status().await.identifiers, 3);
}
