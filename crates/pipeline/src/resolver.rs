//! Key resolution against the catalog tables.

use crate::state::{PipelineState, Shared};
use imagery_catalog::Catalog;
use imagery_core::{ContentRef, LoadItem, LoadOrder, LogicalKey};
use std::sync::Arc;

/// Outcome of resolving a logical key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The image is stored under this reference.
    Ready(ContentRef),
    /// A source URL is known and an acquisition has been queued.
    Loading,
    /// Nothing is known about the key.
    Missing,
}

/// Answer to a source URL query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceUrl {
    Url(String),
    /// No URL is known; carries the `NONE_0` reference if it is stored.
    Placeholder(Option<ContentRef>),
}

/// What the tables know about a key, without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lookup {
    Stored(ContentRef),
    Url(String),
    Unknown,
}

pub(crate) fn lookup(catalog: &Catalog, key: &LogicalKey) -> Lookup {
    if let Some(content) = catalog.identifier(key) {
        return Lookup::Stored(content.clone());
    }
    match catalog.url(key) {
        Some(url) => Lookup::Url(url.to_string()),
        None => Lookup::Unknown,
    }
}

/// Resolve a key, queueing a silent single-item order when only the URL is
/// known. The order is queued before this returns.
pub(crate) fn resolve(
    shared: &Arc<Shared>,
    state: &mut PipelineState,
    key: &LogicalKey,
) -> Resolution {
    match lookup(&state.catalog, key) {
        Lookup::Stored(content) => Resolution::Ready(content),
        Lookup::Url(url) => {
            let order = LoadOrder::silent(key.name(), vec![LoadItem::url(key.clone(), url)]);
            shared.enqueue(state, order);
            Resolution::Loading
        }
        Lookup::Unknown => Resolution::Missing,
    }
}

/// Reference to hand out for a resolution: the image itself or a placeholder.
pub(crate) fn reference_for(catalog: &Catalog, resolution: Resolution) -> Option<ContentRef> {
    match resolution {
        Resolution::Ready(content) => Some(content),
        Resolution::Loading => catalog.identifier(&LogicalKey::loading()).cloned(),
        Resolution::Missing => catalog.identifier(&LogicalKey::none()).cloned(),
    }
}

pub(crate) fn source_url(catalog: &Catalog, key: &LogicalKey) -> SourceUrl {
    match catalog.url(key) {
        Some(url) => SourceUrl::Url(url.to_string()),
        None => SourceUrl::Placeholder(catalog.identifier(&LogicalKey::none()).cloned()),
    }
}
