//! Event listeners that apply the widget's invalidation policy.

use metrics::counter;
use tracing::{debug, info};

use crate::application::registry::TypeRegistry;
use crate::application::repos::RepoError;
use crate::domain::types::PostStatus;
use crate::infra::telemetry::METRIC_CACHE_CLEAR;

use super::events::{HardDelete, StatusTransition};
use super::fragment::FragmentCache;

/// Statuses whose arrival stales the sitewide counts.
const INVALIDATING_STATUSES: [PostStatus; 3] =
    [PostStatus::Inherit, PostStatus::Publish, PostStatus::Trash];

/// Applies the two invalidation triggers to the fragment cache.
///
/// The host calls these from its status-transition and hard-delete
/// extension points. Both are pure with respect to the event payload; all
/// state lives behind the metadata port.
pub struct CacheInvalidator {
    cache: FragmentCache,
    registry: TypeRegistry,
}

impl CacheInvalidator {
    pub fn new(cache: FragmentCache, registry: TypeRegistry) -> Self {
        Self { cache, registry }
    }

    /// Trigger 1: a qualifying status transition clears every cached copy.
    pub async fn on_status_transition(
        &self,
        event: &StatusTransition,
    ) -> Result<(), RepoError> {
        if !self.registry.is_public(&event.kind) {
            debug!(
                item_id = event.item_id,
                kind = %event.kind,
                "transition ignored: type not public"
            );
            return Ok(());
        }
        if !INVALIDATING_STATUSES.contains(&event.to) {
            debug!(
                item_id = event.item_id,
                to = ?event.to,
                "transition ignored: status outside invalidating set"
            );
            return Ok(());
        }

        self.cache.clear_all().await?;
        counter!(METRIC_CACHE_CLEAR).increment(1);
        info!(
            item_id = event.item_id,
            kind = %event.kind,
            from = ?event.from,
            to = ?event.to,
            "site counts cache cleared"
        );
        Ok(())
    }

    /// Trigger 2: a hard delete acts as a transition into `trash`, unless
    /// the item was already trashed.
    pub async fn on_hard_delete(&self, event: &HardDelete) -> Result<(), RepoError> {
        if event.last_status == PostStatus::Trash {
            debug!(item_id = event.item_id, "hard delete ignored: already trashed");
            return Ok(());
        }

        self.on_status_transition(&StatusTransition {
            item_id: event.item_id,
            kind: event.kind.clone(),
            from: event.last_status,
            to: PostStatus::Trash,
        })
        .await
    }
}
