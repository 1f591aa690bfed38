//! Fragment cache for the content summary widget.
//!
//! The rendered fragment is persisted as item metadata under a fixed key and
//! invalidated globally: the fragment embeds sitewide per-type counts, so a
//! qualifying status change on any item stales every cached copy, not just
//! the one attached to the transitioning item.

mod events;
mod fragment;
mod invalidator;

pub use events::{HardDelete, StatusTransition};
pub use fragment::{FragmentCache, SITE_COUNTS_META_KEY};
pub use invalidator::CacheInvalidator;
