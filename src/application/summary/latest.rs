//! Selection of the latest-posts list entries.

use crate::domain::entities::ContentItem;

/// Walk `rows` in query order, skip the item being displayed, and keep at
/// most `cap` entries. Scanning stops as soon as the cap is reached.
pub(crate) fn select_latest(rows: Vec<ContentItem>, exclude: i64, cap: usize) -> Vec<ContentItem> {
    let mut picked = Vec::with_capacity(cap.min(rows.len()));
    for row in rows {
        if row.id == exclude {
            continue;
        }
        picked.push(row);
        if picked.len() == cap {
            break;
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::types::PostStatus;

    fn item(id: i64) -> ContentItem {
        ContentItem {
            id,
            title: format!("Item {id}"),
            status: PostStatus::Publish,
            kind: "post".to_string(),
            tags: vec!["foo".to_string()],
            categories: vec!["baz".to_string()],
            published_at: datetime!(2026-08-04 10:00 UTC),
        }
    }

    #[test]
    fn skips_current_item_and_caps() {
        let rows: Vec<ContentItem> = (1..=10).map(item).collect();
        let picked = select_latest(rows, 2, 5);
        let ids: Vec<i64> = picked.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5, 6]);
    }

    #[test]
    fn returns_everything_under_the_cap() {
        let rows: Vec<ContentItem> = (1..=3).map(item).collect();
        let picked = select_latest(rows, 99, 5);
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn empty_when_only_the_current_item_matches() {
        let picked = select_latest(vec![item(4)], 4, 5);
        assert!(picked.is_empty());
    }
}
