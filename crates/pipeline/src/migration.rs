//! Startup reconciliation of the identifier table with the live namespace.

use imagery_catalog::Catalog;
use imagery_core::config::LibraryConfig;
use imagery_core::{
    ContentRef, LoadItem, LoadOrder, LogicalKey, Namespace, PLACEHOLDER_COUNT,
};
use imagery_storage::{BlobKind, BlobStore};
use std::collections::BTreeSet;

/// Label of the order that re-stores images from a previous namespace.
pub const RESTORATION_LABEL: &str = "Image restoration from previous database";

/// What startup has to do with the loaded identifier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationPlan {
    /// The table is not initialized: wipe it, queue placeholders and user
    /// images, then sync the remote catalog.
    FreshInit,
    /// The table was written under another namespace: re-store what can
    /// still be read from it.
    Restore { previous: Namespace },
    /// The table matches the live namespace.
    Current,
}

pub fn plan(catalog: &Catalog, live: Namespace) -> MigrationPlan {
    if catalog.identifier_count() < PLACEHOLDER_COUNT {
        MigrationPlan::FreshInit
    } else if catalog.namespace() != live {
        MigrationPlan::Restore {
            previous: catalog.namespace(),
        }
    } else {
        MigrationPlan::Current
    }
}

/// Silent single-item orders for both placeholders and every configured
/// user image, in that order.
pub fn fresh_init_orders(config: &LibraryConfig) -> Vec<LoadOrder> {
    let placeholders = [
        (LogicalKey::none(), config.placeholder_none_url.as_str()),
        (LogicalKey::loading(), config.placeholder_loading_url.as_str()),
    ];
    let user_images = config
        .user_images
        .iter()
        .filter(|(_, url)| !url.is_empty())
        .map(|(name, url)| (LogicalKey::new(name.clone(), 0), url.as_str()));

    placeholders
        .into_iter()
        .chain(user_images)
        .map(|(key, url)| {
            let label = key.name().to_string();
            LoadOrder::silent(label, vec![LoadItem::url(key, url)])
        })
        .collect()
}

/// Bytes recovered from the previous namespace.
#[derive(Debug)]
pub struct Restoration {
    /// Non-silent order re-storing every recovered image.
    pub order: LoadOrder,
    /// Entries whose blob could not be read; they must be dropped.
    pub failed: Vec<LogicalKey>,
}

impl Restoration {
    pub fn restored(&self) -> usize {
        self.order.len()
    }
}

/// Read every entry's blob under `previous`, newest key first.
///
/// The namespace listing decides which entries are worth reading; entries
/// it does not contain fail without touching the store. If the listing
/// itself fails every entry is read.
pub async fn collect_restoration(
    entries: Vec<(LogicalKey, ContentRef)>,
    store: &dyn BlobStore,
    previous: Namespace,
) -> Restoration {
    let present: Option<BTreeSet<ContentRef>> = match store.list(BlobKind::Png, previous).await {
        Ok(listed) => Some(listed.into_iter().collect()),
        Err(e) => {
            tracing::warn!(namespace = %previous, error = %e, "Failed to list previous namespace");
            None
        }
    };

    let mut items = Vec::with_capacity(entries.len());
    let mut failed = Vec::new();

    for (key, content) in entries.into_iter().rev() {
        if present.as_ref().is_some_and(|set| !set.contains(&content)) {
            failed.push(key);
            continue;
        }
        match store.get(&content, BlobKind::Png, previous).await {
            Ok(Some(data)) => items.push(LoadItem::bytes(key, data)),
            Ok(None) => failed.push(key),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read image from previous namespace");
                failed.push(key);
            }
        }
    }

    Restoration {
        order: LoadOrder::new(RESTORATION_LABEL, items),
        failed,
    }
}

/// Placeholder keys with no identifier entry.
pub fn missing_placeholders(catalog: &Catalog) -> Vec<LogicalKey> {
    [LogicalKey::none(), LogicalKey::loading()]
        .into_iter()
        .filter(|key| catalog.identifier(key).is_none())
        .collect()
}
