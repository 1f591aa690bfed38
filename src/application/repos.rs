//! Port traits describing the host platform capabilities this unit needs.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::WidgetConfig;
use crate::domain::entities::ContentItem;
use crate::domain::types::PostStatus;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Filter for the latest-posts query.
///
/// The three trailing booleans are performance hints for the host's query
/// engine; they never change which rows come back.
#[derive(Debug, Clone)]
pub struct RecentPostsFilter {
    pub kinds: Vec<String>,
    pub status: PostStatus,
    pub tag: String,
    pub category: String,
    pub publish_hour_min: u8,
    pub publish_hour_max: u8,
    pub limit: usize,
    pub ignore_sticky: bool,
    pub count_found_rows: bool,
    pub warm_meta_cache: bool,
    pub warm_term_cache: bool,
}

impl RecentPostsFilter {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            kinds: config.latest_kinds.clone(),
            status: PostStatus::Publish,
            tag: config.latest_tag.clone(),
            category: config.latest_category.clone(),
            publish_hour_min: config.publish_hour_min,
            publish_hour_max: config.publish_hour_max,
            limit: config.query_limit,
            ignore_sticky: true,
            count_found_rows: false,
            warm_meta_cache: false,
            warm_term_cache: false,
        }
    }
}

/// Read access to the host's content store.
#[async_trait]
pub trait ContentQuery: Send + Sync {
    /// Count items of `kind` currently in `status`.
    async fn count_with_status(&self, kind: &str, status: PostStatus) -> Result<u64, RepoError>;

    /// Most recent items matching the filter, newest first, at most
    /// `filter.limit` rows.
    async fn recent_posts(&self, filter: &RecentPostsFilter)
    -> Result<Vec<ContentItem>, RepoError>;
}

/// Per-item key/value metadata on the host's persistence layer.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn get(&self, item: i64, key: &str) -> Result<Option<String>, RepoError>;

    async fn set(&self, item: i64, key: &str, value: &str) -> Result<(), RepoError>;

    /// Remove the given key from every item that carries it.
    async fn delete_by_key(&self, key: &str) -> Result<(), RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_from_default_config() {
        let filter = RecentPostsFilter::from_config(&WidgetConfig::default());
        assert_eq!(filter.kinds, vec!["post", "page"]);
        assert_eq!(filter.status, PostStatus::Publish);
        assert_eq!(filter.tag, "foo");
        assert_eq!(filter.category, "baz");
        assert_eq!(filter.publish_hour_min, 9);
        assert_eq!(filter.publish_hour_max, 17);
        assert_eq!(filter.limit, 10);
        assert!(filter.ignore_sticky);
        assert!(!filter.count_found_rows);
        assert!(!filter.warm_meta_cache);
        assert!(!filter.warm_term_cache);
    }
}
