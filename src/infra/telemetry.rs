//! Metric registration for the widget's cache counters.

use std::sync::Once;

use metrics::{Unit, describe_counter};

pub(crate) const METRIC_CACHE_HIT: &str = "site_counts_cache_hit_total";
pub(crate) const METRIC_CACHE_MISS: &str = "site_counts_cache_miss_total";
pub(crate) const METRIC_CACHE_CLEAR: &str = "site_counts_cache_clear_total";

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Describe the widget's metrics on the host's installed recorder.
///
/// Safe to call from multiple entry points; descriptions register once.
pub fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            METRIC_CACHE_HIT,
            Unit::Count,
            "Total number of fragment cache hits."
        );
        describe_counter!(
            METRIC_CACHE_MISS,
            Unit::Count,
            "Total number of fragment cache misses."
        );
        describe_counter!(
            METRIC_CACHE_CLEAR,
            Unit::Count,
            "Total number of global fragment cache clears."
        );
    });
}
