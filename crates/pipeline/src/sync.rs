//! Remote catalog synchronisation.
//!
//! Two sources populate the URL and metadata tables:
//! 1. The item schema, a single JSON document listing icon URLs per item
//!    definition.
//! 2. The community catalog, a paginated listing of user-submitted skins whose
//!    tags are matched to item shortnames.
//!
//! This module only turns remote documents into [`CatalogEntry`] values; the
//! library applies them to the tables and flushes.

use crate::error::{PipelineError, PipelineResult};
use crate::fetch::{HttpFetcher, fetch_success};
use crate::items::ItemDirectory;
use async_trait::async_trait;
use imagery_catalog::defaults::WORKSHOP_TAGS;
use imagery_core::config::SyncConfig;
use imagery_core::{ImageMetadata, LogicalKey};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// One URL table entry plus its metadata record.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub key: LogicalKey,
    pub url: String,
    pub metadata: ImageMetadata,
}

// Item schema

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    items: Vec<SchemaItem>,
}

/// One item of the schema document.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaItem {
    #[serde(default)]
    pub itemshortname: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub itemdefid: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub workshopid: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Map schema items to catalog entries.
///
/// Items whose shortname is unknown to the directory are skipped. The key
/// suffix is the item's own definition id when the definition registers it as
/// a skin, and the workshop id otherwise.
pub fn schema_entries(items: &dyn ItemDirectory, schema: &[SchemaItem]) -> Vec<CatalogEntry> {
    schema
        .iter()
        .filter(|item| !item.itemshortname.is_empty() && !item.icon_url.is_empty())
        .filter_map(|item| {
            let definition = items.find(&item.itemshortname)?;
            let registered = item.itemdefid.is_some_and(|id| definition.has_skin(id));
            let suffix = if registered {
                item.itemdefid
            } else {
                item.workshopid
            }?;
            Some(CatalogEntry {
                key: LogicalKey::new(item.itemshortname.clone(), suffix),
                url: item.icon_url.clone(),
                metadata: ImageMetadata::basic(item.name.clone(), item.description.clone()),
            })
        })
        .collect()
}

// Community catalog

/// One item of a community catalog page.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkshopItem {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub votes_up: u64,
    #[serde(default)]
    pub votes_down: u64,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub views: u64,
    #[serde(default = "unix_epoch", deserialize_with = "lenient_timestamp")]
    pub created: OffsetDateTime,
}

/// Paginated source of community catalog items.
#[async_trait]
pub trait CommunityCatalog: Send + Sync + 'static {
    /// Fetch one page (1-based). A page shorter than `per_page` is the last.
    async fn fetch_page(&self, page: u32, per_page: u32) -> PipelineResult<Vec<WorkshopItem>>;
}

#[derive(Debug, Deserialize)]
struct CommunityPage {
    #[serde(default)]
    items: Vec<WorkshopItem>,
}

/// [`CommunityCatalog`] served over HTTP as `{url}?page=N&per_page=M&tags=a,b`.
pub struct HttpCommunityCatalog {
    fetcher: Arc<dyn HttpFetcher>,
    url: String,
    tags: Vec<String>,
}

impl HttpCommunityCatalog {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, url: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
            tags,
        }
    }

    fn page_url(&self, page: u32, per_page: u32) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        let mut url = format!("{}{separator}page={page}&per_page={per_page}", self.url);
        if !self.tags.is_empty() {
            url.push_str("&tags=");
            url.push_str(&self.tags.join(","));
        }
        url
    }
}

#[async_trait]
impl CommunityCatalog for HttpCommunityCatalog {
    async fn fetch_page(&self, page: u32, per_page: u32) -> PipelineResult<Vec<WorkshopItem>> {
        let url = self.page_url(page, per_page);
        let body = fetch_success(self.fetcher.as_ref(), &url).await?;
        let page: CommunityPage = serde_json::from_slice(&body)
            .map_err(|e| PipelineError::InvalidDocument(format!("{url}: {e}")))?;
        Ok(page.items)
    }
}

/// Normalize a tag or display name for shortname lookup.
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
        .replace("skin", "")
        .replace(' ', "")
        .replace('-', "")
}

/// Normalized tag to item shortname.
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    entries: HashMap<String, String>,
}

impl TagTable {
    /// Built-in table first, then every item's normalized display name.
    /// The first entry for a tag wins.
    pub fn build(items: &dyn ItemDirectory) -> Self {
        let mut entries: HashMap<String, String> = WORKSHOP_TAGS
            .iter()
            .map(|(tag, shortname)| ((*tag).to_string(), (*shortname).to_string()))
            .collect();
        for item in items.items() {
            if item.display_name.is_empty() {
                continue;
            }
            entries
                .entry(normalize_tag(&item.display_name))
                .or_insert(item.shortname);
        }
        Self { entries }
    }

    pub fn lookup(&self, tag: &str) -> Option<&str> {
        self.entries.get(&normalize_tag(tag)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Map community items to catalog entries, one per matching tag.
pub fn community_entries(tags: &TagTable, items: &[WorkshopItem]) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    for item in items {
        let (Some(id), Some(preview)) = (item.id, item.preview_url.as_deref()) else {
            continue;
        };
        if preview.is_empty() {
            continue;
        }
        for tag in &item.tags {
            let Some(shortname) = tags.lookup(tag) else {
                continue;
            };
            entries.push(CatalogEntry {
                key: LogicalKey::new(shortname, id),
                url: preview.to_string(),
                metadata: ImageMetadata {
                    title: item.title.clone(),
                    description: item.description.clone(),
                    votes_up: item.votes_up,
                    votes_down: item.votes_down,
                    score: item.score,
                    views: item.views,
                    created: item.created,
                },
            });
        }
    }
    entries
}

/// Fetches both remote sources.
pub struct RemoteCatalogSync {
    fetcher: Arc<dyn HttpFetcher>,
    items: Arc<dyn ItemDirectory>,
    community: Option<Arc<dyn CommunityCatalog>>,
    config: SyncConfig,
}

impl RemoteCatalogSync {
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        items: Arc<dyn ItemDirectory>,
        community: Option<Arc<dyn CommunityCatalog>>,
        config: SyncConfig,
    ) -> Self {
        Self {
            fetcher,
            items,
            community,
            config,
        }
    }

    /// Whether the community phase runs after the schema phase.
    pub fn community_enabled(&self) -> bool {
        self.config.workshop_images && self.community.is_some()
    }

    /// Phase 1: fetch the item schema and map it to entries.
    pub async fn fetch_schema(&self) -> PipelineResult<Vec<CatalogEntry>> {
        tracing::info!(url = %self.config.schema_url, "Retrieving item schema");
        let body = fetch_success(self.fetcher.as_ref(), &self.config.schema_url).await?;
        let document: SchemaDocument = serde_json::from_slice(&body).map_err(|e| {
            PipelineError::InvalidDocument(format!("{}: {e}", self.config.schema_url))
        })?;

        let entries = schema_entries(self.items.as_ref(), &document.items);
        tracing::info!(
            items = document.items.len(),
            entries = entries.len(),
            "Item schema retrieved"
        );
        Ok(entries)
    }

    /// Phase 2: page through the community catalog. Returns an empty list
    /// when the phase is disabled.
    pub async fn fetch_community(&self) -> PipelineResult<Vec<CatalogEntry>> {
        let Some(community) = self.community.as_ref().filter(|_| self.config.workshop_images)
        else {
            return Ok(Vec::new());
        };

        let per_page = self.config.workshop_page_size;
        let tags = TagTable::build(self.items.as_ref());
        let mut entries = Vec::new();
        let mut seen = 0usize;
        let mut page = 1u32;

        tracing::info!(per_page, "Querying community catalog");
        loop {
            let items = community.fetch_page(page, per_page).await?;
            seen += items.len();
            entries.extend(community_entries(&tags, &items));
            if items.len() < per_page as usize {
                break;
            }
            page += 1;
        }

        tracing::info!(
            items = seen,
            pages = page,
            entries = entries.len(),
            "Community catalog retrieved"
        );
        Ok(entries)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
    Other(IgnoredAny),
}

/// Accept a JSON number or a numeric string; anything else reads as absent.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<NumberOrText>::deserialize(deserializer)? {
            Some(NumberOrText::Number(n)) => Some(n),
            Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
            Some(NumberOrText::Other(_)) | None => None,
        },
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    Seconds(i64),
    Text(String),
    Other(IgnoredAny),
}

/// Accept Unix seconds or RFC 3339 text; anything else reads as the epoch.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<TimestampRepr>::deserialize(deserializer)? {
        Some(TimestampRepr::Seconds(secs)) => OffsetDateTime::from_unix_timestamp(secs).ok(),
        Some(TimestampRepr::Text(text)) => OffsetDateTime::parse(&text, &Rfc3339).ok(),
        Some(TimestampRepr::Other(_)) | None => None,
    };
    Ok(parsed.unwrap_or(OffsetDateTime::UNIX_EPOCH))
}

fn unix_epoch() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}
