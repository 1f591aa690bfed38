//! Shared domain enumerations aligned with the host platform's status set.

use serde::{Deserialize, Serialize};

/// Type tag the host uses for media attachments.
///
/// Attachments live in the `inherit` status, so aggregate counts for this
/// type read a different status than every other type.
pub const ATTACHMENT_KIND: &str = "attachment";

/// Publication status of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostStatus {
    Draft,
    Pending,
    Private,
    Publish,
    Future,
    Inherit,
    Trash,
    AutoDraft,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Pending => "pending",
            PostStatus::Private => "private",
            PostStatus::Publish => "publish",
            PostStatus::Future => "future",
            PostStatus::Inherit => "inherit",
            PostStatus::Trash => "trash",
            PostStatus::AutoDraft => "auto-draft",
        }
    }
}

impl TryFrom<&str> for PostStatus {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "draft" => Ok(PostStatus::Draft),
            "pending" => Ok(PostStatus::Pending),
            "private" => Ok(PostStatus::Private),
            "publish" => Ok(PostStatus::Publish),
            "future" => Ok(PostStatus::Future),
            "inherit" => Ok(PostStatus::Inherit),
            "trash" => Ok(PostStatus::Trash),
            "auto-draft" => Ok(PostStatus::AutoDraft),
            _ => Err(()),
        }
    }
}
