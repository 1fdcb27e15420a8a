//! Descriptive metadata attached to catalogued images.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Metadata record for one logical image, as reported by a remote catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Display title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Community up-votes.
    #[serde(default)]
    pub votes_up: u64,
    /// Community down-votes.
    #[serde(default)]
    pub votes_down: u64,
    /// Aggregate score reported by the catalog.
    #[serde(default)]
    pub score: f64,
    /// View count.
    #[serde(default)]
    pub views: u64,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339", default = "unix_epoch")]
    pub created: OffsetDateTime,
}

fn unix_epoch() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

impl ImageMetadata {
    /// A record carrying only a title and description; counters are zero.
    pub fn basic(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            votes_up: 0,
            votes_down: 0,
            score: 0.0,
            views: 0,
            created: unix_epoch(),
        }
    }
}
