//! Per-type aggregate count sentences.

use crate::application::registry::TypeRegistry;
use crate::application::repos::{ContentQuery, RepoError};

/// One pluralized sentence per public type, in registry capture order.
pub(crate) async fn count_lines(
    registry: &TypeRegistry,
    query: &dyn ContentQuery,
) -> Result<Vec<String>, RepoError> {
    let mut lines = Vec::new();
    for descriptor in registry.public_types() {
        let count = query
            .count_with_status(&descriptor.slug, descriptor.countable_status())
            .await?;
        lines.push(count_sentence(
            count,
            &descriptor.singular_label,
            &descriptor.plural_label,
        ));
    }
    Ok(lines)
}

fn count_sentence(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("There is 1 {singular}.")
    } else {
        format!("There are {count} {plural}.")
    }
}

#[cfg(test)]
mod tests {
    use super::count_sentence;

    #[test]
    fn singular_form_for_exactly_one() {
        assert_eq!(count_sentence(1, "Page", "Pages"), "There is 1 Page.");
    }

    #[test]
    fn plural_form_for_zero_and_many() {
        assert_eq!(count_sentence(0, "Page", "Pages"), "There are 0 Pages.");
        assert_eq!(count_sentence(2, "Page", "Pages"), "There are 2 Pages.");
        assert_eq!(count_sentence(41, "Post", "Posts"), "There are 41 Posts.");
    }
}
