//! Storage namespace identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Namespace value used before any namespace has been recorded.
pub const UNSET_NAMESPACE_U64: u64 = 0;

/// Opaque session/epoch value scoping blob-store content references.
///
/// The host assigns it; when it changes, references stored under the old
/// value can no longer be dereferenced under the new one.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(u64);

impl Namespace {
    /// Create a namespace from its raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this is the unset default.
    pub const fn is_unset(self) -> bool {
        self.0 == UNSET_NAMESPACE_U64
    }
}

impl From<u64> for Namespace {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for Namespace {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| crate::Error::InvalidNamespace(format!("{s:?}: {e}")))
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({})", self.0)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
