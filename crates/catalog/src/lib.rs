//! Persisted catalogs for imagery.
//!
//! This crate provides:
//! - The identifier table (logical key to content reference) and its
//!   namespace marker
//! - The URL table (logical key to source URL), seeded from built-in defaults
//! - The metadata table (logical key to descriptive record)
//! - Independent, atomic JSON persistence of each table

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod models;
pub mod store;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use store::{CatalogStore, IDENTIFIERS_FILE, METADATA_FILE, URLS_FILE};
