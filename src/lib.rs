//! Content summary widget for publishing platforms.
//!
//! Renders an HTML fragment combining sitewide per-type counts with a
//! bounded, filtered list of recent posts, excluding the item currently on
//! display. The fragment is cached per item in the host's metadata store and
//! invalidated globally when any qualifying item changes publication status
//! or is permanently removed.
//!
//! Host capabilities arrive through two ports:
//!
//! - [`ContentQuery`]: per-type counts and the latest-posts query
//! - [`MetadataStore`]: per-item key/value persistence for the cache
//!
//! [`register_block`] wires the renderer and the invalidation listeners from
//! injected ports; [`InMemoryPlatform`] implements both ports for tests and
//! embedded hosts.

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;

pub use application::error::WidgetError;
pub use application::registry::TypeRegistry;
pub use application::repos::{ContentQuery, MetadataStore, RecentPostsFilter, RepoError};
pub use application::summary::{BlockAttributes, SummaryWidget};
pub use cache::{
    CacheInvalidator, FragmentCache, HardDelete, SITE_COUNTS_META_KEY, StatusTransition,
};
pub use config::WidgetConfig;
pub use domain::entities::{ContentItem, ContentTypeDescriptor};
pub use domain::types::{ATTACHMENT_KIND, PostStatus};
pub use infra::block::{BlockManifest, BlockRegistration, register_block};
pub use infra::memory::InMemoryPlatform;
pub use infra::telemetry::describe_metrics;
