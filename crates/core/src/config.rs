//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Blob storage backend configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Local filesystem storage.
    Filesystem {
        /// Root directory for storage.
        path: PathBuf,
        /// Live namespace. When unset, the backend reads the value recorded
        /// in its root directory, creating one on first use.
        #[serde(default)]
        namespace: Option<u64>,
    },
    /// In-process storage (testing and dry runs only; nothing survives exit).
    Memory {
        /// Live namespace.
        #[serde(default = "default_memory_namespace")]
        namespace: u64,
    },
}

fn default_memory_namespace() -> u64 {
    1
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::Filesystem {
            path: PathBuf::from("./data/blobs"),
            namespace: None,
        }
    }
}

impl StorageConfig {
    /// Validate storage configuration invariants.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            StorageConfig::Filesystem {
                namespace: Some(0), ..
            }
            | StorageConfig::Memory { namespace: 0 } => {
                Err("storage.namespace must be non-zero (0 means unset)".to_string())
            }
            StorageConfig::Filesystem { path, .. } if path.as_os_str().is_empty() => {
                Err("storage.path must not be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Catalog persistence configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding the identifier, URL and metadata documents.
    #[serde(default = "default_catalog_dir")]
    pub data_dir: PathBuf,
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("./data/catalog")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: default_catalog_dir(),
        }
    }
}

/// Library behaviour configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Log percentage progress while multi-item orders are processed.
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
    /// Minimum number of seconds between two progress messages.
    #[serde(default = "default_progress_interval_secs")]
    pub progress_interval_secs: u64,
    /// Fetch player avatars when asked to.
    #[serde(default = "default_store_avatars")]
    pub store_avatars: bool,
    /// Source of the `NONE_0` placeholder image.
    #[serde(default = "default_placeholder_none_url")]
    pub placeholder_none_url: String,
    /// Source of the `LOADING_0` placeholder image.
    #[serde(default = "default_placeholder_loading_url")]
    pub placeholder_loading_url: String,
    /// Manually defined images (name -> URL), loaded under variant 0 on
    /// fresh initialization.
    #[serde(default)]
    pub user_images: BTreeMap<String, String>,
}

fn default_show_progress() -> bool {
    true
}

fn default_progress_interval_secs() -> u64 {
    20
}

fn default_store_avatars() -> bool {
    true
}

fn default_placeholder_none_url() -> String {
    "http://i.imgur.com/sZepiWv.png".to_string()
}

fn default_placeholder_loading_url() -> String {
    "http://i.imgur.com/lydxb0u.png".to_string()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            show_progress: default_show_progress(),
            progress_interval_secs: default_progress_interval_secs(),
            store_avatars: default_store_avatars(),
            placeholder_none_url: default_placeholder_none_url(),
            placeholder_loading_url: default_placeholder_loading_url(),
            user_images: BTreeMap::new(),
        }
    }
}

impl LibraryConfig {
    /// Get the progress interval as a Duration.
    pub fn progress_interval(&self) -> Duration {
        Duration::from_secs(self.progress_interval_secs)
    }

    /// Validate library configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.show_progress && self.progress_interval_secs == 0 {
            return Err(
                "library.progress_interval_secs cannot be 0 while show_progress is enabled"
                    .to_string(),
            );
        }
        if self.placeholder_none_url.is_empty() || self.placeholder_loading_url.is_empty() {
            return Err("library placeholder URLs must not be empty".to_string());
        }
        Ok(())
    }
}

/// Remote catalog synchronisation configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Run the remote catalog sync during fresh initialization.
    #[serde(default = "default_sync_enabled")]
    pub enabled: bool,
    /// Item schema document listing icon URLs per item definition.
    #[serde(default = "default_schema_url")]
    pub schema_url: String,
    /// Continue with the paginated community catalog after the schema.
    #[serde(default = "default_workshop_images")]
    pub workshop_images: bool,
    /// Community catalog endpoint. The community phase is skipped when unset.
    #[serde(default)]
    pub workshop_url: Option<String>,
    /// Items requested per community catalog page.
    #[serde(default = "default_workshop_page_size")]
    pub workshop_page_size: u32,
    /// Tags every community catalog item must carry.
    #[serde(default = "default_workshop_tags")]
    pub workshop_tags: Vec<String>,
    /// JSON file describing the known item definitions.
    #[serde(default)]
    pub items_file: Option<PathBuf>,
    /// Profile document template used to look up player avatars.
    /// `{user_id}` is replaced with the player's id.
    #[serde(default = "default_avatar_profile_url")]
    pub avatar_profile_url: String,
}

fn default_sync_enabled() -> bool {
    true
}

fn default_schema_url() -> String {
    "http://s3.amazonaws.com/s3.playrust.com/icons/inventory/rust/schema.json".to_string()
}

fn default_workshop_images() -> bool {
    true
}

fn default_workshop_page_size() -> u32 {
    500
}

fn default_workshop_tags() -> Vec<String> {
    vec!["version3".to_string(), "skin".to_string()]
}

fn default_avatar_profile_url() -> String {
    "http://steamcommunity.com/profiles/{user_id}?xml=1".to_string()
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: default_sync_enabled(),
            schema_url: default_schema_url(),
            workshop_images: default_workshop_images(),
            workshop_url: None,
            workshop_page_size: default_workshop_page_size(),
            workshop_tags: default_workshop_tags(),
            items_file: None,
            avatar_profile_url: default_avatar_profile_url(),
        }
    }
}

impl SyncConfig {
    /// Validate sync configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.workshop_page_size == 0 {
            return Err("sync.workshop_page_size cannot be 0".to_string());
        }
        if !self.avatar_profile_url.contains("{user_id}") {
            return Err("sync.avatar_profile_url must contain a {user_id} placeholder".to_string());
        }
        Ok(())
    }

    /// Profile URL for one player.
    pub fn avatar_url_for(&self, user_id: &str) -> String {
        self.avatar_profile_url.replace("{user_id}", user_id)
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Blob storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Catalog persistence configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Library behaviour.
    #[serde(default)]
    pub library: LibraryConfig,
    /// Remote catalog synchronisation.
    #[serde(default)]
    pub sync: SyncConfig,
}

impl AppConfig {
    /// Validate every section.
    pub fn validate(&self) -> crate::Result<()> {
        self.storage
            .validate()
            .and_then(|_| self.library.validate())
            .and_then(|_| self.sync.validate())
            .map_err(crate::Error::Config)
    }

    /// Create a test configuration.
    ///
    /// **For testing only.** Uses in-memory storage, disables the remote sync
    /// and progress output.
    pub fn for_testing() -> Self {
        Self {
            storage: StorageConfig::Memory {
                namespace: default_memory_namespace(),
            },
            catalog: CatalogConfig::default(),
            library: LibraryConfig {
                show_progress: false,
                ..LibraryConfig::default()
            },
            sync: SyncConfig {
                enabled: false,
                workshop_images: false,
                ..SyncConfig::default()
            },
        }
    }
}
