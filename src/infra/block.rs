//! Host-facing block registration.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::application::error::WidgetError;
use crate::application::registry::TypeRegistry;
use crate::application::repos::{ContentQuery, MetadataStore};
use crate::application::summary::SummaryWidget;
use crate::cache::{CacheInvalidator, FragmentCache};
use crate::config::WidgetConfig;

/// Block description bundled with the crate.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockManifest {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl BlockManifest {
    /// Parse the manifest shipped at `blocks/site-counts/block.json`.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        serde_json::from_str(include_str!("../../blocks/site-counts/block.json"))
    }
}

/// Everything the host wires into its extension points: the render handle
/// and the two lifecycle listeners.
pub struct BlockRegistration {
    pub manifest: BlockManifest,
    pub widget: Arc<SummaryWidget>,
    pub invalidator: Arc<CacheInvalidator>,
}

/// Build the widget and its invalidation listeners from host capabilities.
///
/// The registry snapshot is captured by the caller once per scope and shared
/// by the renderer and the invalidator.
pub fn register_block(
    config: WidgetConfig,
    registry: TypeRegistry,
    query: Arc<dyn ContentQuery>,
    metadata: Arc<dyn MetadataStore>,
) -> Result<BlockRegistration, WidgetError> {
    let manifest = BlockManifest::bundled()?;
    let cache = FragmentCache::new(metadata);
    let widget = Arc::new(SummaryWidget::new(
        config,
        registry.clone(),
        query,
        cache.clone(),
    ));
    let invalidator = Arc::new(CacheInvalidator::new(cache, registry));
    info!(block = %manifest.name, "site counts block registered");
    Ok(BlockRegistration {
        manifest,
        widget,
        invalidator,
    })
}

#[cfg(test)]
mod tests {
    use super::BlockManifest;

    #[test]
    fn bundled_manifest_parses() {
        let manifest = BlockManifest::bundled().expect("manifest should parse");
        assert_eq!(manifest.name, "xwp/site-counts");
        assert_eq!(manifest.title, "Site Counts");
        assert!(manifest.attributes.contains_key("className"));
    }
}
