//! Core domain types and shared logic for the imagery pipeline.
//!
//! This crate defines the canonical data model used across all other crates:
//! - Logical image keys and their composite persisted form
//! - Content references handed out by the blob store
//! - Storage namespaces that scope those references
//! - Image metadata records
//! - Load orders (batches of pending acquisitions)
//! - Configuration shared by the library and the admin binary

pub mod config;
pub mod error;
pub mod hash;
pub mod key;
pub mod load_order;
pub mod metadata;
pub mod namespace;

pub use error::{Error, Result};
pub use hash::{ContentHash, ContentRef};
pub use key::{LOADING_NAME, LogicalKey, NONE_NAME};
pub use load_order::{LoadItem, LoadOrder, Source};
pub use metadata::ImageMetadata;
pub use namespace::Namespace;

/// Number of placeholder entries every initialized identifier table carries.
pub const PLACEHOLDER_COUNT: usize = 2;
