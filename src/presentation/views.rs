use askama::Template;

/// The widget fragment.
///
/// `counts` holds fully formed sentences; pluralization happens in the
/// application layer where the type labels live.
#[derive(Template)]
#[template(path = "summary.html")]
pub struct SummaryTemplate {
    pub root_class: String,
    pub counts: Vec<String>,
    pub current_post: i64,
    pub latest: Option<LatestListView>,
}

/// Optional latest-posts section; omitted entirely when no rows survive
/// filtering.
pub struct LatestListView {
    pub heading: String,
    pub titles: Vec<String>,
}
