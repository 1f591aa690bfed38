//! In-memory platform adapter.
//!
//! Implements both host ports over concurrent maps so the caching policy can
//! be exercised without a real content platform. The query-call counters let
//! tests assert that a cache hit performs no computation.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::repos::{ContentQuery, MetadataStore, RecentPostsFilter, RepoError};
use crate::domain::entities::ContentItem;
use crate::domain::types::PostStatus;

#[derive(Default)]
pub struct InMemoryPlatform {
    items: DashMap<i64, ContentItem>,
    metadata: DashMap<(i64, String), String>,
    count_queries: AtomicUsize,
    recent_queries: AtomicUsize,
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, item: ContentItem) {
        self.items.insert(item.id, item);
    }

    pub fn remove(&self, id: i64) -> Option<ContentItem> {
        self.items.remove(&id).map(|(_, item)| item)
    }

    /// Direct metadata peek, bypassing the async port.
    pub fn metadata_value(&self, item: i64, key: &str) -> Option<String> {
        self.metadata
            .get(&(item, key.to_string()))
            .map(|entry| entry.value().clone())
    }

    pub fn count_queries(&self) -> usize {
        self.count_queries.load(Ordering::SeqCst)
    }

    pub fn recent_queries(&self) -> usize {
        self.recent_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentQuery for InMemoryPlatform {
    async fn count_with_status(
        &self,
        kind: &str,
        status: PostStatus,
    ) -> Result<u64, RepoError> {
        self.count_queries.fetch_add(1, Ordering::SeqCst);
        let count = self
            .items
            .iter()
            .filter(|entry| {
                let item = entry.value();
                item.kind == kind && item.status == status
            })
            .count();
        Ok(count as u64)
    }

    async fn recent_posts(
        &self,
        filter: &RecentPostsFilter,
    ) -> Result<Vec<ContentItem>, RepoError> {
        self.recent_queries.fetch_add(1, Ordering::SeqCst);
        let hours = filter.publish_hour_min..=filter.publish_hour_max;
        let mut rows: Vec<ContentItem> = self
            .items
            .iter()
            .filter(|entry| {
                let item = entry.value();
                filter.kinds.iter().any(|kind| *kind == item.kind)
                    && item.status == filter.status
                    && item.tags.contains(&filter.tag)
                    && item.categories.contains(&filter.category)
                    && hours.contains(&item.published_at.hour())
            })
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then(b.id.cmp(&a.id))
        });
        rows.truncate(filter.limit);
        Ok(rows)
    }
}

#[async_trait]
impl MetadataStore for InMemoryPlatform {
    async fn get(&self, item: i64, key: &str) -> Result<Option<String>, RepoError> {
        Ok(self
            .metadata
            .get(&(item, key.to_string()))
            .map(|entry| entry.value().clone()))
    }

    async fn set(&self, item: i64, key: &str, value: &str) -> Result<(), RepoError> {
        self.metadata
            .insert((item, key.to_string()), value.to_string());
        Ok(())
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), RepoError> {
        self.metadata.retain(|(_, existing), _| existing != key);
        Ok(())
    }
}
