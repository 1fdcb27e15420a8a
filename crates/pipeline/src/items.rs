//! Known item definitions.

use crate::error::PipelineResult;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One item definition: its shortname, display name and registered skin ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemDefinition {
    pub shortname: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub skins: Vec<u64>,
}

impl ItemDefinition {
    pub fn new(shortname: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            shortname: shortname.into(),
            display_name: display_name.into(),
            skins: Vec::new(),
        }
    }

    pub fn with_skins(mut self, skins: impl IntoIterator<Item = u64>) -> Self {
        self.skins = skins.into_iter().collect();
        self
    }

    pub fn has_skin(&self, id: u64) -> bool {
        self.skins.contains(&id)
    }
}

/// Lookup of item definitions by shortname.
pub trait ItemDirectory: Send + Sync + 'static {
    fn find(&self, shortname: &str) -> Option<ItemDefinition>;

    fn items(&self) -> Vec<ItemDefinition>;
}

#[derive(Deserialize)]
struct ItemsFile {
    items: Vec<ItemDefinition>,
}

/// Fixed, in-memory item directory.
#[derive(Debug, Clone, Default)]
pub struct StaticItemDirectory {
    items: BTreeMap<String, ItemDefinition>,
}

impl StaticItemDirectory {
    pub fn new(items: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.shortname.clone(), item))
                .collect(),
        }
    }

    /// Load definitions from a JSON file of the form `{"items": [...]}`.
    pub async fn from_json_file(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let data = tokio::fs::read(path.as_ref()).await?;
        let file: ItemsFile = serde_json::from_slice(&data)?;
        tracing::info!(
            path = %path.as_ref().display(),
            items = file.items.len(),
            "Loaded item definitions"
        );
        Ok(Self::new(file.items))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemDirectory for StaticItemDirectory {
    fn find(&self, shortname: &str) -> Option<ItemDefinition> {
        self.items.get(shortname).cloned()
    }

    fn items(&self) -> Vec<ItemDefinition> {
        self.items.values().cloned().collect()
    }
}
