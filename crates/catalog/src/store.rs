//! Durable catalog storage.

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{IdentifierDocument, MetadataDocument, UrlDocument};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Identifier table and namespace marker.
pub const IDENTIFIERS_FILE: &str = "image_data.json";
/// URL table.
pub const URLS_FILE: &str = "image_urls.json";
/// Metadata table.
pub const METADATA_FILE: &str = "skin_data.json";

/// Reads and writes the three catalog documents in one directory.
///
/// Each document is loaded and saved independently. Loading never fails: a
/// missing, unreadable or corrupt document yields an empty table.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    dir: PathBuf,
}

impl CatalogStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every table. An empty URL table is seeded from the built-in defaults.
    pub async fn load(&self) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.apply_identifier_document(self.read_document(IDENTIFIERS_FILE).await);
        catalog.apply_url_document(self.read_document(URLS_FILE).await);
        catalog.apply_metadata_document(self.read_document(METADATA_FILE).await);

        if catalog.url_count() == 0 {
            let seeded = catalog.seed_default_urls();
            tracing::info!(seeded, "Seeded URL table from built-in defaults");
        }

        tracing::info!(
            dir = %self.dir.display(),
            namespace = %catalog.namespace(),
            identifiers = catalog.identifier_count(),
            urls = catalog.url_count(),
            metadata = catalog.metadata_count(),
            "Catalog loaded"
        );
        catalog
    }

    pub async fn save_identifiers(&self, catalog: &Catalog) -> CatalogResult<()> {
        self.write_document(IDENTIFIERS_FILE, &catalog.identifier_document())
            .await
    }

    pub async fn save_urls(&self, catalog: &Catalog) -> CatalogResult<()> {
        self.write_document(URLS_FILE, &catalog.url_document()).await
    }

    pub async fn save_metadata(&self, catalog: &Catalog) -> CatalogResult<()> {
        self.write_document(METADATA_FILE, &catalog.metadata_document())
            .await
    }

    /// Save all three documents, stopping at the first failure.
    pub async fn save_all(&self, catalog: &Catalog) -> CatalogResult<()> {
        self.save_identifiers(catalog).await?;
        self.save_urls(catalog).await?;
        self.save_metadata(catalog).await
    }

    async fn read_document<T>(&self, file: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.dir.join(file);
        let data = match fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Catalog document missing, starting empty");
                return T::default();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read catalog document, starting empty");
                return T::default();
            }
        };

        match serde_json::from_slice(&data) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt catalog document, starting empty");
                T::default()
            }
        }
    }

    /// Serialize and atomically replace one document.
    async fn write_document<T: Serialize>(&self, file: &str, document: &T) -> CatalogResult<()> {
        let data = serde_json::to_vec_pretty(document)?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CatalogError::io(&self.dir, e))?;

        let path = self.dir.join(file);
        let temp_path = self.dir.join(format!(".{file}.tmp.{}", Uuid::new_v4()));
        let result = async {
            let mut handle = fs::File::create(&temp_path).await?;
            handle.write_all(&data).await?;
            handle.sync_all().await?;
            fs::rename(&temp_path, &path).await
        }
        .await;

        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path).await;
            return Err(CatalogError::io(&path, e));
        }

        tracing::debug!(path = %path.display(), bytes = data.len(), "Catalog document saved");
        Ok(())
    }
}
