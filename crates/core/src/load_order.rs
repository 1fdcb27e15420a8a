//! Load orders: named batches of pending image acquisitions.

use crate::key::LogicalKey;
use bytes::Bytes;
use std::fmt;

/// Where the bytes for one acquisition come from.
#[derive(Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetch over HTTP, then decode and re-encode.
    Url(String),
    /// Store the given bytes as-is.
    Bytes(Bytes),
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.debug_tuple("Url").field(url).finish(),
            Self::Bytes(bytes) => write!(f, "Bytes(<{} bytes>)", bytes.len()),
        }
    }
}

/// One entry of a load order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadItem {
    pub key: LogicalKey,
    pub source: Source,
}

impl LoadItem {
    pub fn url(key: LogicalKey, url: impl Into<String>) -> Self {
        Self {
            key,
            source: Source::Url(url.into()),
        }
    }

    pub fn bytes(key: LogicalKey, bytes: impl Into<Bytes>) -> Self {
        Self {
            key,
            source: Source::Bytes(bytes.into()),
        }
    }
}

/// A named, ordered batch of pending acquisitions.
///
/// Load orders only ever live in memory; a crash loses queued orders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOrder {
    /// Human-readable label used in log messages.
    pub label: String,
    /// Silent orders log neither their start nor their completion.
    pub silent: bool,
    /// Items, processed strictly in this order.
    pub items: Vec<LoadItem>,
}

impl LoadOrder {
    /// A non-silent order.
    pub fn new(label: impl Into<String>, items: Vec<LoadItem>) -> Self {
        Self {
            label: label.into(),
            silent: false,
            items,
        }
    }

    /// A silent order.
    pub fn silent(label: impl Into<String>, items: Vec<LoadItem>) -> Self {
        Self {
            label: label.into(),
            silent: true,
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
