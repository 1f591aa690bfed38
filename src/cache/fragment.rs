//! Persisted fragment storage over the host metadata port.

use std::sync::Arc;

use tracing::debug;

use crate::application::repos::{MetadataStore, RepoError};

/// Metadata key the rendered fragment is stored under.
pub const SITE_COUNTS_META_KEY: &str = "xwp-site-counts";

/// Typed wrapper around the metadata port for fragment reads and writes.
///
/// At most one fragment exists per item; a present, non-empty value is the
/// exact string a recomputation would produce right now.
#[derive(Clone)]
pub struct FragmentCache {
    store: Arc<dyn MetadataStore>,
}

impl FragmentCache {
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        Self { store }
    }

    /// Cached fragment for `item`, treating an empty value as absent.
    pub async fn read(&self, item: i64) -> Result<Option<String>, RepoError> {
        let value = self.store.get(item, SITE_COUNTS_META_KEY).await?;
        Ok(value.filter(|fragment| !fragment.is_empty()))
    }

    /// Persist `fragment` for `item`.
    pub async fn write(&self, item: i64, fragment: &str) -> Result<(), RepoError> {
        self.store.set(item, SITE_COUNTS_META_KEY, fragment).await?;
        debug!(item_id = item, bytes = fragment.len(), "site counts fragment cached");
        Ok(())
    }

    /// Drop the fragment from every item that carries one.
    pub async fn clear_all(&self) -> Result<(), RepoError> {
        self.store.delete_by_key(SITE_COUNTS_META_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryPlatform;

    #[tokio::test]
    async fn empty_value_reads_as_absent() {
        let platform = Arc::new(InMemoryPlatform::new());
        let cache = FragmentCache::new(platform.clone());

        platform
            .set(7, SITE_COUNTS_META_KEY, "")
            .await
            .expect("set should succeed");
        assert!(cache.read(7).await.expect("read should succeed").is_none());

        cache.write(7, "<div></div>").await.expect("write should succeed");
        assert_eq!(
            cache.read(7).await.expect("read should succeed").as_deref(),
            Some("<div></div>")
        );
    }

    #[tokio::test]
    async fn clear_all_removes_every_copy() {
        let platform = Arc::new(InMemoryPlatform::new());
        let cache = FragmentCache::new(platform.clone());

        cache.write(1, "a").await.expect("write should succeed");
        cache.write(2, "b").await.expect("write should succeed");
        platform
            .set(2, "unrelated", "keep")
            .await
            .expect("set should succeed");

        cache.clear_all().await.expect("clear should succeed");

        assert!(cache.read(1).await.expect("read should succeed").is_none());
        assert!(cache.read(2).await.expect("read should succeed").is_none());
        assert_eq!(
            platform
                .get(2, "unrelated")
                .await
                .expect("get should succeed")
                .as_deref(),
            Some("keep")
        );
    }
}
