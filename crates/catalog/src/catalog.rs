//! In-memory catalog tables.

use crate::defaults::DEFAULT_URLS;
use crate::models::{IdentifierDocument, MetadataDocument, UrlDocument};
use imagery_core::{ContentRef, ImageMetadata, LogicalKey, Namespace};
use std::collections::{BTreeMap, BTreeSet};

/// The identifier, URL and metadata tables plus the namespace marker.
///
/// Keys are real [`LogicalKey`] tuples here; composite strings appear only in
/// the persisted documents.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    namespace: Namespace,
    identifiers: BTreeMap<LogicalKey, ContentRef>,
    urls: BTreeMap<LogicalKey, String>,
    metadata: BTreeMap<LogicalKey, ImageMetadata>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // Identifier table

    /// Namespace the identifier table's references were stored under.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn set_namespace(&mut self, namespace: Namespace) {
        self.namespace = namespace;
    }

    pub fn identifier(&self, key: &LogicalKey) -> Option<&ContentRef> {
        self.identifiers.get(key)
    }

    pub fn set_identifier(&mut self, key: LogicalKey, content: ContentRef) {
        self.identifiers.insert(key, content);
    }

    pub fn remove_identifier(&mut self, key: &LogicalKey) -> Option<ContentRef> {
        self.identifiers.remove(key)
    }

    pub fn clear_identifiers(&mut self) {
        self.identifiers.clear();
    }

    pub fn identifier_count(&self) -> usize {
        self.identifiers.len()
    }

    /// Identifier entries in key order.
    pub fn identifiers(&self) -> impl DoubleEndedIterator<Item = (&LogicalKey, &ContentRef)> {
        self.identifiers.iter()
    }

    // URL table

    pub fn url(&self, key: &LogicalKey) -> Option<&str> {
        self.urls.get(key).map(String::as_str)
    }

    /// Add or overwrite a source URL. URL entries are never removed.
    pub fn set_url(&mut self, key: LogicalKey, url: impl Into<String>) {
        self.urls.insert(key, url.into());
    }

    pub fn url_count(&self) -> usize {
        self.urls.len()
    }

    /// Every variant id with a URL entry for `name`.
    pub fn variant_ids(&self, name: &str) -> BTreeSet<u64> {
        let start = LogicalKey::new(name, 0);
        self.urls
            .range(start..)
            .take_while(|(key, _)| key.name() == name)
            .map(|(key, _)| key.variant())
            .collect()
    }

    /// Seed the URL table from the built-in defaults under variant 0.
    ///
    /// Returns the number of entries added. Existing entries are kept.
    pub fn seed_default_urls(&mut self) -> usize {
        let mut added = 0;
        for (name, url) in DEFAULT_URLS {
            let key = LogicalKey::new(*name, 0);
            if !self.urls.contains_key(&key) {
                self.urls.insert(key, (*url).to_string());
                added += 1;
            }
        }
        added
    }

    // Metadata table

    pub fn metadata(&self, key: &LogicalKey) -> Option<&ImageMetadata> {
        self.metadata.get(key)
    }

    pub fn set_metadata(&mut self, key: LogicalKey, record: ImageMetadata) {
        self.metadata.insert(key, record);
    }

    pub fn metadata_count(&self) -> usize {
        self.metadata.len()
    }

    // Persistence boundary

    /// Replace the identifier table and marker from a persisted document.
    pub fn apply_identifier_document(&mut self, document: IdentifierDocument) {
        self.namespace = document.namespace;
        self.identifiers = document
            .identifiers
            .into_iter()
            .filter_map(|(composite, value)| {
                let key = parse_key(&composite, "identifier")?;
                match ContentRef::new(value) {
                    Ok(content) => Some((key, content)),
                    Err(e) => {
                        tracing::warn!(key = %key, error = %e, "Skipping catalog entry with invalid reference");
                        None
                    }
                }
            })
            .collect();
    }

    pub fn apply_url_document(&mut self, document: UrlDocument) {
        self.urls = document
            .urls
            .into_iter()
            .filter_map(|(composite, url)| Some((parse_key(&composite, "url")?, url)))
            .collect();
    }

    pub fn apply_metadata_document(&mut self, document: MetadataDocument) {
        self.metadata = document
            .metadata
            .into_iter()
            .filter_map(|(composite, record)| Some((parse_key(&composite, "metadata")?, record)))
            .collect();
    }

    pub fn identifier_document(&self) -> IdentifierDocument {
        IdentifierDocument {
            namespace: self.namespace,
            identifiers: self
                .identifiers
                .iter()
                .map(|(key, content)| (key.to_composite(), content.as_str().to_string()))
                .collect(),
        }
    }

    pub fn url_document(&self) -> UrlDocument {
        UrlDocument {
            urls: self
                .urls
                .iter()
                .map(|(key, url)| (key.to_composite(), url.clone()))
                .collect(),
        }
    }

    pub fn metadata_document(&self) -> MetadataDocument {
        MetadataDocument {
            metadata: self
                .metadata
                .iter()
                .map(|(key, record)| (key.to_composite(), record.clone()))
                .collect(),
        }
    }
}

fn parse_key(composite: &str, table: &'static str) -> Option<LogicalKey> {
    match LogicalKey::parse_composite(composite) {
        Ok(key) => Some(key),
        Err(e) => {
            tracing::warn!(table, composite, error = %e, "Skipping catalog entry with unparseable key");
            None
        }
    }
}
