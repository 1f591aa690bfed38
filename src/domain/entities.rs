//! Domain entities mirrored from the host platform's content store.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::types::{ATTACHMENT_KIND, PostStatus};

/// A single published/draftable unit (post, page, attachment, ...).
///
/// The item's metadata mapping is not carried here; it lives behind the
/// injected metadata store port.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem {
    pub id: i64,
    pub title: String,
    pub status: PostStatus,
    pub kind: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub published_at: OffsetDateTime,
}

/// Descriptor for one registered content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentTypeDescriptor {
    pub slug: String,
    pub singular_label: String,
    pub plural_label: String,
    pub public: bool,
}

impl ContentTypeDescriptor {
    pub fn new(
        slug: impl Into<String>,
        singular_label: impl Into<String>,
        plural_label: impl Into<String>,
        public: bool,
    ) -> Self {
        Self {
            slug: slug.into(),
            singular_label: singular_label.into(),
            plural_label: plural_label.into(),
            public,
        }
    }

    /// Status that counts toward this type's aggregate.
    ///
    /// Attachments never reach `publish`; their countable state is `inherit`.
    pub fn countable_status(&self) -> PostStatus {
        if self.slug == ATTACHMENT_KIND {
            PostStatus::Inherit
        } else {
            PostStatus::Publish
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_counts_inherit() {
        let descriptor = ContentTypeDescriptor::new("attachment", "Media", "Media", true);
        assert_eq!(descriptor.countable_status(), PostStatus::Inherit);
    }

    #[test]
    fn regular_types_count_publish() {
        let descriptor = ContentTypeDescriptor::new("post", "Post", "Posts", true);
        assert_eq!(descriptor.countable_status(), PostStatus::Publish);
    }
}
