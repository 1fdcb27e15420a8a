//! Logical image keys.
//!
//! A [`LogicalKey`] is a `(name, variant)` pair. In memory it is always handled
//! as a tuple; the composite `name_variant` string form exists only at the
//! persistence boundary, where the catalog documents are keyed by it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the "no image" placeholder.
pub const NONE_NAME: &str = "NONE";

/// Name of the "acquisition pending" placeholder.
pub const LOADING_NAME: &str = "LOADING";

/// Identifies a logical image: an item name plus a numeric variant (skin) id.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogicalKey {
    name: String,
    variant: u64,
}

impl LogicalKey {
    /// Create a key from its parts.
    pub fn new(name: impl Into<String>, variant: u64) -> Self {
        Self {
            name: name.into(),
            variant,
        }
    }

    /// The `NONE_0` placeholder key.
    pub fn none() -> Self {
        Self::new(NONE_NAME, 0)
    }

    /// The `LOADING_0` placeholder key.
    pub fn loading() -> Self {
        Self::new(LOADING_NAME, 0)
    }

    /// The image name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variant id.
    pub fn variant(&self) -> u64 {
        self.variant
    }

    /// Whether this is one of the two reserved placeholder keys.
    pub fn is_placeholder(&self) -> bool {
        self.variant == 0 && (self.name == NONE_NAME || self.name == LOADING_NAME)
    }

    /// Composite textual form used by the persisted catalogs.
    pub fn to_composite(&self) -> String {
        format!("{}_{}", self.name, self.variant)
    }

    /// Parse a composite `name_variant` string.
    ///
    /// Splits on the last underscore, which is the exact inverse of
    /// [`LogicalKey::to_composite`]. Names may themselves contain underscores.
    pub fn parse_composite(composite: &str) -> crate::Result<Self> {
        let (name, variant) = composite.rsplit_once('_').ok_or_else(|| {
            crate::Error::InvalidKey(format!("missing variant separator: {composite}"))
        })?;
        if name.is_empty() {
            return Err(crate::Error::InvalidKey(format!(
                "empty name in composite key: {composite}"
            )));
        }
        let variant = variant.parse::<u64>().map_err(|e| {
            crate::Error::InvalidKey(format!("invalid variant in {composite}: {e}"))
        })?;
        Ok(Self::new(name, variant))
    }
}

impl FromStr for LogicalKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::parse_composite(s)
    }
}

impl fmt::Debug for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicalKey({self})")
    }
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.name, self.variant)
    }
}
