//! Safe-tag allowlist applied to the assembled fragment.

use std::collections::HashSet;

use ammonia::Builder as AmmoniaBuilder;
use once_cell::sync::Lazy;

static FRAGMENT_SANITIZER: Lazy<AmmoniaBuilder<'static>> = Lazy::new(build_fragment_sanitizer);

/// Reduce `html` to the widget's safe-tag allowlist.
pub(crate) fn sanitize_fragment(html: &str) -> String {
    FRAGMENT_SANITIZER.clean(html).to_string()
}

fn build_fragment_sanitizer() -> AmmoniaBuilder<'static> {
    let mut builder = AmmoniaBuilder::default();

    let tags: HashSet<&'static str> = HashSet::from([
        "a", "div", "em", "h2", "li", "p", "span", "strong", "ul",
    ]);
    builder.tags(tags);

    let generic: HashSet<&'static str> = HashSet::from(["class"]);
    builder.generic_attributes(generic);

    builder.add_tag_attributes("a", &["href", "target"]);
    builder.add_url_schemes(["http", "https", "mailto"].iter().copied());

    builder
}
