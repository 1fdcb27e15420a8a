mod common;

use bytes::Bytes;
use common::{MockFetcher, SLOW_PREFIX, build, png, started, test_config};
use imagery_core::{ContentHash, Namespace};
use imagery_pipeline::{MigrationPlan, Resolution, SourceUrl};
use imagery_storage::{BlobKind, BlobStore, MemoryBlobStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_fresh_start_stores_placeholders() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryBlobStore::new(Namespace::new(1)));
    let h = build(test_config(dir.path()), store, Arc::new(MockFetcher::new())).await;

    assert_eq!(h.library.start().await, MigrationPlan::FreshInit);
    h.library.wait_idle().await;

    assert!(h.library.has_image("NONE", 0).await);
    assert!(h.library.has_image("LOADING", 0).await);
    let status = h.library.status().await;
    assert_eq!(status.identifiers, 2);
    assert_eq!(status.namespace, Namespace::new(1));
    assert!(dir.path().join("image_data.json").exists());
}

#[tokio::test]
async fn test_unknown_key_resolves_to_none_placeholder() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;

    let Resolution::Ready(none) = h.library.resolve("NONE", 0).await else {
        panic!("NONE placeholder should be stored");
    };
    assert_eq!(h.library.resolve("no.such.item", 4).await, Resolution::Missing);
    assert_eq!(
        h.library.get_image_reference("no.such.item", 4).await,
        Some(none.clone())
    );
    assert_eq!(
        h.library.get_source_url("no.such.item", 4).await,
        SourceUrl::Placeholder(Some(none))
    );
}

#[tokio::test]
async fn test_added_image_becomes_ready() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    h.fetcher.respond("http://cdn.test/ak.png", png([200, 10, 10, 255]));

    assert!(h.library.add_image("http://cdn.test/ak.png", "rifle.ak", 10135).await);
    h.library.wait_idle().await;

    assert!(h.library.has_image("rifle.ak", 10135).await);
    let reference = h.library.get_image_reference("rifle.ak", 10135).await.unwrap();
    let stored = h
        .store
        .get(&reference, BlobKind::Png, Namespace::new(1))
        .await
        .unwrap()
        .unwrap();
    assert!(image::load_from_memory(&stored).is_ok());
}

#[tokio::test]
async fn test_url_only_key_hands_out_loading_placeholder() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    let Resolution::Ready(loading) = h.library.resolve("LOADING", 0).await else {
        panic!("LOADING placeholder should be stored");
    };

    // Built-in default URL; the mock answers 404 so it never gets stored.
    let url = "http://i.imgur.com/4R0ByHj.png";
    assert_eq!(
        h.library.get_source_url("autoturret", 0).await,
        SourceUrl::Url(url.to_string())
    );
    assert_eq!(
        h.library.get_image_reference("autoturret", 0).await,
        Some(loading)
    );
    h.library.wait_idle().await;

    assert_eq!(h.fetcher.calls_to(url), 1);
    assert!(!h.library.has_image("autoturret", 0).await);
}

#[tokio::test]
async fn test_orders_processed_in_fifo_order() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    let urls = [
        "http://cdn.test/a.png",
        "http://cdn.test/b.png",
        "http://cdn.test/c.png",
    ];
    for (i, url) in urls.iter().enumerate() {
        h.fetcher.respond(url, png([i as u8, 50, 50, 255]));
    }

    for (i, url) in urls.iter().enumerate() {
        h.library.add_image(url, &format!("item{i}"), 0).await;
    }
    h.library.wait_idle().await;

    let seen: Vec<String> = h
        .fetcher
        .calls()
        .into_iter()
        .filter(|call| call.starts_with("http://cdn.test/"))
        .collect();
    assert_eq!(seen, urls.map(String::from).to_vec());
}

#[tokio::test]
async fn test_import_skips_stored_keys() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    h.fetcher.respond("http://cdn.test/hatchet.png", png([1, 2, 3, 255]));
    let mapping = || vec![("hatchet".to_string(), "http://cdn.test/hatchet.png".to_string())];

    h.library.import_bulk("Tools", mapping(), 0, false).await;
    h.library.wait_idle().await;
    h.library.import_bulk("Tools", mapping(), 0, false).await;
    h.library.wait_idle().await;
    assert_eq!(h.fetcher.calls_to("http://cdn.test/hatchet.png"), 1);
    assert_eq!(h.library.list_variant_ids("hatchet").await.len(), 1);

    h.library.import_bulk("Tools", mapping(), 0, true).await;
    h.library.wait_idle().await;
    assert_eq!(h.fetcher.calls_to("http://cdn.test/hatchet.png"), 2);
}

#[tokio::test]
async fn test_import_item_list_records_every_variant() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    h.fetcher.respond("http://cdn.test/door-1.png", png([9, 9, 1, 255]));
    h.fetcher.respond("http://cdn.test/door-2.png", png([9, 9, 2, 255]));

    let variants = BTreeMap::from([
        (11, "http://cdn.test/door-1.png".to_string()),
        (12, "http://cdn.test/door-2.png".to_string()),
    ]);
    h.library
        .import_item_list("Doors", vec![("door.hinged".to_string(), variants)], false)
        .await;
    h.library.wait_idle().await;

    assert!(h.library.has_image("door.hinged", 11).await);
    assert!(h.library.has_image("door.hinged", 12).await);
    assert_eq!(
        h.library.list_variant_ids("door.hinged").await.into_iter().collect::<Vec<_>>(),
        vec![11, 12]
    );
}

#[tokio::test]
async fn test_raw_image_data_is_stored_as_is() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    let before = h.store.records_in(Namespace::new(1));
    let data = Bytes::from_static(b"seventeen bytes!!");
    assert_eq!(data.len(), 17);

    assert!(h.library.add_image_data("testitem", data.clone(), 5).await);
    h.library.wait_idle().await;

    assert!(h.library.has_image("testitem", 5).await);
    assert_eq!(h.store.records_in(Namespace::new(1)), before + 1);
    assert_eq!(
        h.library.get_image_reference("testitem", 5).await,
        Some(ContentHash::compute(&data).to_content_ref())
    );
}

#[tokio::test]
async fn test_load_image_list_only_queues_known_urls() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    h.library
        .import_image_data(
            "Seed",
            vec![("crate.small".to_string(), Bytes::from_static(b"crate"))],
            0,
            false,
        )
        .await;
    h.library.wait_idle().await;

    h.library
        .load_image_list(
            "Mixed",
            vec![("autoturret".to_string(), 0), ("unknown.thing".to_string(), 0)],
        )
        .await;
    h.library.wait_idle().await;

    assert_eq!(h.fetcher.calls_to("http://i.imgur.com/4R0ByHj.png"), 1);
    assert!(h.library.has_image("crate.small", 0).await);
    assert!(!h.library.has_image("unknown.thing", 0).await);
}

#[tokio::test]
async fn test_remove_image_keeps_shared_content() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    let data = Bytes::from_static(b"shared");
    h.library.add_image_data("first", data.clone(), 0).await;
    h.library.add_image_data("second", data.clone(), 0).await;
    h.library.wait_idle().await;

    assert!(h.library.remove_image("first", 0).await);
    assert!(!h.library.has_image("first", 0).await);
    assert!(h.library.has_image("second", 0).await);

    assert!(h.library.remove_image("second", 0).await);
    let content = ContentHash::compute(&data).to_content_ref();
    assert!(
        !h.store
            .exists(&content, BlobKind::Png, Namespace::new(1))
            .await
            .unwrap()
    );
    assert!(!h.library.remove_image("second", 0).await);
}

#[tokio::test]
async fn test_placeholders_cannot_be_removed() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    let none = h.library.get_image_reference("NONE", 0).await.unwrap();
    let records = h.store.records_in(Namespace::new(1));

    assert!(!h.library.remove_image("NONE", 0).await);
    assert!(!h.library.remove_image("LOADING", 0).await);

    assert!(h.library.has_image("NONE", 0).await);
    assert!(h.library.has_image("LOADING", 0).await);
    assert_eq!(h.library.resolve("NONE", 0).await, Resolution::Ready(none));
    assert_eq!(h.store.records_in(Namespace::new(1)), records);
}

#[tokio::test]
async fn test_dangling_reference_reads_as_absent() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    h.library
        .add_image_data("ghost", Bytes::from_static(b"boo"), 0)
        .await;
    h.library.wait_idle().await;
    let content = h.library.get_image_reference("ghost", 0).await.unwrap();

    h.store
        .remove(&content, BlobKind::Png, Namespace::new(1))
        .await
        .unwrap();

    assert!(!h.library.has_image("ghost", 0).await);
    // The identifier entry itself is left alone.
    assert_eq!(
        h.library.resolve("ghost", 0).await,
        Resolution::Ready(content)
    );
}

#[tokio::test]
async fn test_failed_download_is_skipped() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    h.fetcher
        .respond_with("http://cdn.test/broken.png", 500, "oops");
    h.fetcher.respond("http://cdn.test/garbage.png", "not an image");
    h.fetcher.respond("http://cdn.test/fine.png", png([7, 7, 7, 255]));

    h.library
        .import_bulk(
            "Mixed",
            vec![
                ("broken".to_string(), "http://cdn.test/broken.png".to_string()),
                ("garbage".to_string(), "http://cdn.test/garbage.png".to_string()),
                ("fine".to_string(), "http://cdn.test/fine.png".to_string()),
            ],
            0,
            false,
        )
        .await;
    h.library.wait_idle().await;

    assert!(!h.library.has_image("broken", 0).await);
    assert!(!h.library.has_image("garbage", 0).await);
    assert!(h.library.has_image("fine", 0).await);
}

#[tokio::test]
async fn test_cancel_abandons_pending_work() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    assert!(!h.library.cancel_pending().await);
    let records_before = h.store.records_in(Namespace::new(1));

    let urls: Vec<String> = (0..3).map(|i| format!("{SLOW_PREFIX}{i}.png")).collect();
    for (i, url) in urls.iter().enumerate() {
        h.fetcher.respond(url, png([i as u8, 0, 200, 255]));
    }
    h.library
        .import_bulk(
            "Slow",
            urls.iter()
                .enumerate()
                .map(|(i, url)| (format!("slow{i}"), url.clone())),
            0,
            false,
        )
        .await;
    h.library.add_image(&urls[0], "queued.after", 0).await;

    h.fetcher.started.notified().await;
    assert!(!h.library.is_idle().await);
    assert!(h.library.cancel_pending().await);
    assert!(h.library.is_idle().await);

    h.fetcher.gate.add_permits(10);
    h.library.wait_idle().await;
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    for i in 0..3 {
        assert!(!h.library.has_image(&format!("slow{i}"), 0).await);
    }
    assert!(!h.library.has_image("queued.after", 0).await);
    assert!(h.library.has_image("NONE", 0).await);
    assert!(h.library.has_image("LOADING", 0).await);
    // The fetch that finished after the cancel left nothing in the store.
    assert_eq!(h.store.records_in(Namespace::new(1)), records_before);
}

#[tokio::test]
async fn test_cancelled_fetch_does_not_write_during_next_batch() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    let records_before = h.store.records_in(Namespace::new(1));
    let slow = format!("{SLOW_PREFIX}stale.png");
    h.fetcher.respond(&slow, png([10, 20, 30, 255]));

    h.library.add_image(&slow, "stale", 0).await;
    h.fetcher.started.notified().await;
    assert!(h.library.cancel_pending().await);

    // A new batch runs to completion while the stale fetch is still parked.
    h.library
        .add_image_data("fresh", Bytes::from_static(b"fresh bytes"), 0)
        .await;
    h.library.wait_idle().await;
    assert!(h.library.has_image("fresh", 0).await);

    h.fetcher.gate.add_permits(1);
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    assert!(!h.library.has_image("stale", 0).await);
    assert_eq!(h.store.records_in(Namespace::new(1)), records_before + 1);
}

#[tokio::test]
async fn test_player_avatar() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    h.fetcher.respond(
        "http://profiles.test/76561198000000001?xml=1",
        "<profile><avatarFull><![CDATA[http://avatars.test/full.jpg]]></avatarFull></profile>",
    );
    h.fetcher.respond("http://avatars.test/full.jpg", png([3, 4, 5, 255]));

    assert!(h.library.fetch_player_avatar("76561198000000001").await);
    h.library.wait_idle().await;
    assert!(h.library.has_image("76561198000000001", 0).await);

    // Already stored.
    assert!(!h.library.fetch_player_avatar("76561198000000001").await);
    assert!(!h.library.fetch_player_avatar("").await);
    // Unknown profile.
    assert!(!h.library.fetch_player_avatar("1").await);
}

#[tokio::test]
async fn test_avatars_disabled() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(dir.path());
    config.library.store_avatars = false;
    let store = Arc::new(MemoryBlobStore::new(Namespace::new(1)));
    let h = build(config, store, Arc::new(MockFetcher::new())).await;
    h.library.start().await;

    assert!(!h.library.fetch_player_avatar("76561198000000001").await);
    assert!(h.fetcher.calls().iter().all(|call| !call.contains("profiles.test")));
}

#[tokio::test]
async fn test_user_images_loaded_on_fresh_start() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(dir.path());
    config
        .library
        .user_images
        .insert("server.logo".to_string(), "http://cdn.test/logo.png".to_string());
    let fetcher = Arc::new(MockFetcher::new());
    fetcher.respond("http://cdn.test/logo.png", png([250, 250, 0, 255]));
    let store = Arc::new(MemoryBlobStore::new(Namespace::new(1)));
    let h = build(config, store, fetcher).await;

    h.library.start().await;
    h.library.wait_idle().await;

    assert!(h.library.has_image("server.logo", 0).await);
    assert_eq!(h.library.status().await.identifiers, 3);
}

#[tokio::test]
async fn test_refresh_rebuilds_identifier_table() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    h.library
        .add_image_data("scratch", Bytes::from_static(b"scratch"), 0)
        .await;
    h.library.wait_idle().await;
    assert_eq!(h.library.status().await.identifiers, 3);

    h.library.refresh_imagery().await;
    h.library.wait_idle().await;

    assert!(!h.library.has_image("scratch", 0).await);
    assert!(h.library.has_image("NONE", 0).await);
    assert_eq!(h.library.status().await.identifiers, 2);
}

#[tokio::test]
async fn test_second_start_is_ignored() {
    let dir = TempDir::new().unwrap();
    let h = started(dir.path()).await;
    assert_eq!(h.library.start().await, MigrationPlan::Current);
}
