//! Content summary rendering service.
//!
//! Assembly order: cache read, per-type counts, latest-posts selection,
//! template render, sanitize, cache write. The cache read comes first so a
//! hit skips every downstream step.

mod counts;
mod latest;
mod sanitize;

use std::sync::Arc;

use askama::Template;
use metrics::counter;
use serde::Deserialize;
use tracing::debug;

use crate::application::error::WidgetError;
use crate::application::registry::TypeRegistry;
use crate::application::repos::{ContentQuery, RecentPostsFilter};
use crate::cache::FragmentCache;
use crate::config::WidgetConfig;
use crate::infra::telemetry::{METRIC_CACHE_HIT, METRIC_CACHE_MISS};
use crate::presentation::views::{LatestListView, SummaryTemplate};

/// Attributes supplied by the host when the block renders.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAttributes {
    pub class_name: Option<String>,
}

/// The renderer half of the widget.
pub struct SummaryWidget {
    config: WidgetConfig,
    registry: TypeRegistry,
    query: Arc<dyn ContentQuery>,
    cache: FragmentCache,
}

impl SummaryWidget {
    pub fn new(
        config: WidgetConfig,
        registry: TypeRegistry,
        query: Arc<dyn ContentQuery>,
        cache: FragmentCache,
    ) -> Self {
        Self {
            config,
            registry,
            query,
            cache,
        }
    }

    /// Render the fragment for the item currently being displayed.
    ///
    /// A cached fragment is returned verbatim before any computation; on a
    /// miss the assembled fragment is persisted for the item and returned.
    pub async fn render(
        &self,
        current_post: i64,
        attributes: &BlockAttributes,
    ) -> Result<String, WidgetError> {
        if let Some(cached) = self.cache.read(current_post).await? {
            counter!(METRIC_CACHE_HIT).increment(1);
            debug!(item_id = current_post, "site counts cache hit");
            return Ok(cached);
        }
        counter!(METRIC_CACHE_MISS).increment(1);

        let fragment = self.compose(current_post, attributes).await?;
        self.cache.write(current_post, &fragment).await?;
        Ok(fragment)
    }

    async fn compose(
        &self,
        current_post: i64,
        attributes: &BlockAttributes,
    ) -> Result<String, WidgetError> {
        let counts = counts::count_lines(&self.registry, self.query.as_ref()).await?;

        let filter = RecentPostsFilter::from_config(&self.config);
        let rows = self.query.recent_posts(&filter).await?;
        let picked = latest::select_latest(rows, current_post, self.config.list_cap);
        let latest = if picked.is_empty() {
            None
        } else {
            Some(LatestListView {
                heading: self.config.latest_heading(),
                titles: picked.into_iter().map(|row| row.title).collect(),
            })
        };

        let template = SummaryTemplate {
            root_class: self.root_class(attributes),
            counts,
            current_post,
            latest,
        };
        Ok(sanitize::sanitize_fragment(&template.render()?))
    }

    fn root_class(&self, attributes: &BlockAttributes) -> String {
        match attributes.class_name.as_deref() {
            Some(suffix) if !suffix.is_empty() => {
                format!("{} {suffix}", self.config.base_class)
            }
            _ => self.config.base_class.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryPlatform;

    fn widget() -> SummaryWidget {
        let platform = Arc::new(InMemoryPlatform::new());
        SummaryWidget::new(
            WidgetConfig::default(),
            TypeRegistry::capture(Vec::new()),
            platform.clone(),
            FragmentCache::new(platform),
        )
    }

    #[test]
    fn root_class_without_suffix() {
        let attributes = BlockAttributes::default();
        assert_eq!(widget().root_class(&attributes), "xwp-site-counts");
    }

    #[test]
    fn root_class_appends_suffix() {
        let attributes = BlockAttributes {
            class_name: Some("is-style-wide".to_string()),
        };
        assert_eq!(
            widget().root_class(&attributes),
            "xwp-site-counts is-style-wide"
        );
    }

    #[test]
    fn empty_suffix_is_ignored() {
        let attributes = BlockAttributes {
            class_name: Some(String::new()),
        };
        assert_eq!(widget().root_class(&attributes), "xwp-site-counts");
    }

    #[test]
    fn attributes_deserialize_from_camel_case() {
        let attributes: BlockAttributes =
            serde_json::from_str(r#"{ "className": "extra" }"#)
                .expect("attributes should deserialize");
        assert_eq!(attributes.class_name.as_deref(), Some("extra"));
    }
}
