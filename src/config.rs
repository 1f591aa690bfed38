//! Widget configuration with host-overridable defaults.

use serde::Deserialize;

// Default values matching the shipped block behavior
const DEFAULT_BASE_CLASS: &str = "xwp-site-counts";
const DEFAULT_LATEST_TAG: &str = "foo";
const DEFAULT_LATEST_CATEGORY: &str = "baz";
const DEFAULT_QUERY_LIMIT: usize = 10;
const DEFAULT_LIST_CAP: usize = 5;
const DEFAULT_PUBLISH_HOUR_MIN: u8 = 9;
const DEFAULT_PUBLISH_HOUR_MAX: u8 = 17;

fn default_latest_kinds() -> Vec<String> {
    vec!["post".to_string(), "page".to_string()]
}

/// Configuration for the content summary widget.
///
/// Hosts typically deserialize this from their own settings layer; every
/// field falls back to the shipped default when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Root CSS class of the rendered fragment.
    pub base_class: String,
    /// Tag slug the latest-posts query filters on.
    pub latest_tag: String,
    /// Category slug the latest-posts query filters on.
    pub latest_category: String,
    /// Content types eligible for the latest-posts list.
    pub latest_kinds: Vec<String>,
    /// Maximum rows fetched from the host query.
    pub query_limit: usize,
    /// Maximum entries rendered in the latest-posts list.
    pub list_cap: usize,
    /// Earliest publish hour-of-day admitted to the list (inclusive).
    pub publish_hour_min: u8,
    /// Latest publish hour-of-day admitted to the list (inclusive).
    pub publish_hour_max: u8,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_class: DEFAULT_BASE_CLASS.to_string(),
            latest_tag: DEFAULT_LATEST_TAG.to_string(),
            latest_category: DEFAULT_LATEST_CATEGORY.to_string(),
            latest_kinds: default_latest_kinds(),
            query_limit: DEFAULT_QUERY_LIMIT,
            list_cap: DEFAULT_LIST_CAP,
            publish_hour_min: DEFAULT_PUBLISH_HOUR_MIN,
            publish_hour_max: DEFAULT_PUBLISH_HOUR_MAX,
        }
    }
}

impl WidgetConfig {
    /// Heading of the latest-posts section.
    ///
    /// Uses the configured cap verbatim, even when fewer entries render.
    pub fn latest_heading(&self) -> String {
        format!(
            "{} posts with the tag of {} and the category of {}",
            self.list_cap, self.latest_tag, self.latest_category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_block() {
        let config = WidgetConfig::default();
        assert_eq!(config.base_class, "xwp-site-counts");
        assert_eq!(config.latest_kinds, vec!["post", "page"]);
        assert_eq!(config.query_limit, 10);
        assert_eq!(config.list_cap, 5);
        assert_eq!(config.publish_hour_min, 9);
        assert_eq!(config.publish_hour_max, 17);
    }

    #[test]
    fn latest_heading_reflects_config() {
        let config = WidgetConfig::default();
        assert_eq!(
            config.latest_heading(),
            "5 posts with the tag of foo and the category of baz"
        );

        let custom = WidgetConfig {
            list_cap: 3,
            latest_tag: "rust".to_string(),
            latest_category: "news".to_string(),
            ..WidgetConfig::default()
        };
        assert_eq!(
            custom.latest_heading(),
            "3 posts with the tag of rust and the category of news"
        );
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{ "base_class": "summary", "list_cap": 3 }"#)
                .expect("config should deserialize");
        assert_eq!(config.base_class, "summary");
        assert_eq!(config.list_cap, 3);
        assert_eq!(config.latest_tag, "foo");
        assert_eq!(config.query_limit, 10);
    }
}
