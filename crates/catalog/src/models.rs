//! Persisted catalog documents.
//!
//! Keys are stored in their composite `name_variant` form. Values that fail
//! validation are dropped individually when a document is turned back into
//! tables, so one bad entry never discards a whole catalog.

use imagery_core::{ImageMetadata, Namespace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `image_data.json`: identifier table plus the namespace it was written under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentifierDocument {
    #[serde(default)]
    pub namespace: Namespace,
    #[serde(default)]
    pub identifiers: BTreeMap<String, String>,
}

/// `image_urls.json`: source URL per key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlDocument {
    #[serde(default)]
    pub urls: BTreeMap<String, String>,
}

/// `skin_data.json`: descriptive metadata per key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataDocument {
    #[serde(default)]
    pub metadata: BTreeMap<String, ImageMetadata>,
}
