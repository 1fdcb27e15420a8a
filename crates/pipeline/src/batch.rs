//! Batch processing: drains load orders one item at a time.

use crate::fetch::fetch_success;
use crate::queue::ActiveBatch;
use crate::state::Shared;
use bytes::Bytes;
use imagery_core::{LoadItem, Source};
use imagery_storage::BlobKind;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Rate-limited progress messages for one batch.
///
/// The first message is due one interval after the batch starts; each
/// message pushes the next one a full interval out.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    label: String,
    total: usize,
    interval: Duration,
    next_update: Option<Instant>,
}

impl ProgressReporter {
    /// Reporting is disabled unless `enabled` and the batch has more than one item.
    pub fn new(
        label: impl Into<String>,
        total: usize,
        enabled: bool,
        interval: Duration,
        started: Instant,
    ) -> Self {
        let next_update = (enabled && total > 1).then(|| started + interval);
        Self {
            label: label.into(),
            total,
            interval,
            next_update,
        }
    }

    /// Called before each item with the number of items already done.
    pub fn tick(&mut self, now: Instant, done: usize) -> Option<String> {
        let due = self.next_update?;
        if now <= due {
            return None;
        }
        self.next_update = Some(now + self.interval);
        let percent = ((done as f64 / self.total as f64) * 100.0).round() as u64;
        Some(format!(
            "{} storage process at {percent}% ({done}/{})",
            self.label, self.total
        ))
    }
}

/// Spawn a task that drains the queue until it is empty or cancelled.
pub(crate) fn spawn_drain(shared: &Arc<Shared>) {
    let shared = Arc::clone(shared);
    tokio::spawn(async move { drain(shared).await });
}

async fn drain(shared: Arc<Shared>) {
    let mut batch = {
        let mut state = shared.state.lock().await;
        state.queue.begin_next()
    };

    while let Some(active) = batch.take() {
        let generation = active.generation;
        let label = active.order.label.clone();
        let silent = active.order.silent;

        if !process(&shared, active).await {
            tracing::debug!(label = %label, "Batch abandoned after cancellation");
            return;
        }

        let mut state = shared.state.lock().await;
        if !state.queue.finish(generation) {
            return;
        }
        shared.persist_identifiers(&state.catalog).await;
        if !silent {
            tracing::info!("Image batch ({label}) has been stored successfully");
        }

        batch = state.queue.begin_next();
        if batch.is_none() {
            shared.persist_urls_and_metadata(&state.catalog).await;
        }
        shared.publish_idle(&state);
    }
}

/// Process one batch. Returns false if the queue was cleared mid-batch.
async fn process(shared: &Shared, batch: ActiveBatch) -> bool {
    let ActiveBatch { order, generation } = batch;
    let total = order.len();
    if !order.silent {
        tracing::info!(items = total, "Starting order {}", order.label);
    }

    let mut progress = ProgressReporter::new(
        order.label.clone(),
        total,
        shared.library.show_progress,
        shared.library.progress_interval(),
        Instant::now(),
    );

    for (done, item) in order.items.into_iter().enumerate() {
        if !shared.state.lock().await.queue.is_current(generation) {
            return false;
        }
        if let Some(message) = progress.tick(Instant::now(), done) {
            tracing::info!("{message}");
        }

        let LoadItem { key, source } = item;
        let Some(data) = acquire(shared, &key.to_string(), source).await else {
            continue;
        };

        // Stale results are never written: check and store under one lock.
        let mut state = shared.state.lock().await;
        if !state.queue.is_current(generation) {
            return false;
        }
        let namespace = shared.store.live_namespace();
        let content = match shared.store.store(data, BlobKind::Png, namespace).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to store image");
                continue;
            }
        };
        tracing::debug!(key = %key, content = %content.as_str(), "Image stored");
        state.catalog.set_identifier(key, content);
    }
    true
}

/// Produce the bytes to store for one item, or `None` if the item is skipped.
async fn acquire(shared: &Shared, key: &str, source: Source) -> Option<Bytes> {
    match source {
        Source::Bytes(data) => Some(data),
        Source::Url(url) => {
            let body = match fetch_success(shared.fetcher.as_ref(), &url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(key, url = %url, error = %e, "Image failed to download");
                    return None;
                }
            };

            let codec = Arc::clone(&shared.codec);
            match tokio::task::spawn_blocking(move || codec.normalize(&body)).await {
                Ok(Ok(normalized)) => Some(normalized),
                Ok(Err(e)) => {
                    tracing::debug!(key, url = %url, error = %e, "Dropping undecodable image");
                    None
                }
                Err(e) => {
                    tracing::warn!(key, error = %e, "Image decode task failed");
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(20);

    #[test]
    fn test_first_message_waits_one_interval() {
        let start = Instant::now();
        let mut progress = ProgressReporter::new("Skins", 10, true, INTERVAL, start);

        assert_eq!(progress.tick(start, 0), None);
        assert_eq!(progress.tick(start + Duration::from_secs(20), 3), None);
        assert_eq!(
            progress.tick(start + Duration::from_secs(21), 3).as_deref(),
            Some("Skins storage process at 30% (3/10)")
        );
    }

    #[test]
    fn test_messages_never_closer_than_interval() {
        let start = Instant::now();
        let mut progress = ProgressReporter::new("Skins", 1000, true, INTERVAL, start);

        let mut emitted = Vec::new();
        for second in 0..200u64 {
            let now = start + Duration::from_secs(second);
            if progress.tick(now, second as usize).is_some() {
                emitted.push(second);
            }
        }

        assert!(!emitted.is_empty());
        for pair in emitted.windows(2) {
            assert!(pair[1] - pair[0] > INTERVAL.as_secs());
        }
    }

    #[test]
    fn test_disabled_for_single_items_and_when_off() {
        let start = Instant::now();
        let later = start + Duration::from_secs(3600);

        let mut single = ProgressReporter::new("one", 1, true, INTERVAL, start);
        assert_eq!(single.tick(later, 0), None);

        let mut off = ProgressReporter::new("many", 50, false, INTERVAL, start);
        assert_eq!(off.tick(later, 10), None);
    }
}
