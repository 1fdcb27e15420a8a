//! Image acquisition pipeline for imagery.
//!
//! This crate provides:
//! - Resolution of logical keys to stored content, with placeholders
//! - A FIFO load-order queue drained by a single background batch
//! - Download and PNG normalization of remote images
//! - Remote catalog sync (item schema and community catalog)
//! - Namespace migration when the storage backend changes

pub mod avatar;
pub(crate) mod batch;
pub mod codec;
pub mod error;
pub mod fetch;
pub mod items;
pub mod library;
pub mod migration;
pub mod queue;
pub mod resolver;
pub(crate) mod state;
pub mod sync;

pub use batch::ProgressReporter;
pub use codec::{ImageCodec, PngCodec};
pub use error::{PipelineError, PipelineResult};
pub use fetch::{FetchResponse, HttpFetcher, ReqwestFetcher};
pub use items::{ItemDefinition, ItemDirectory, StaticItemDirectory};
pub use library::{ImageLibrary, LibraryBuilder, LibraryStatus, SyncReport};
pub use migration::{MigrationPlan, RESTORATION_LABEL};
pub use resolver::{Resolution, SourceUrl};
pub use sync::{CommunityCatalog, HttpCommunityCatalog, WorkshopItem};
