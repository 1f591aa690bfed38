//! Composite error surfaced by the widget to its host.

use thiserror::Error;

use crate::application::repos::RepoError;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error("failed to render summary template: {0}")]
    Template(#[from] askama::Error),
    #[error("invalid block manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
