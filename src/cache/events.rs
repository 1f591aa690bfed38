//! Lifecycle event payloads delivered by the host.

use crate::domain::types::PostStatus;

/// An item moved from one publication status to another.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTransition {
    pub item_id: i64,
    pub kind: String,
    pub from: PostStatus,
    pub to: PostStatus,
}

/// An item was permanently removed, bypassing the trash stage.
#[derive(Debug, Clone, PartialEq)]
pub struct HardDelete {
    pub item_id: i64,
    pub kind: String,
    /// Status the item held at the moment of deletion.
    pub last_status: PostStatus,
}
