//! Tag operations

use tracing::{debug, info, instrument};

use taglog_core::error::GitError;

use crate::history::History;
use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;

impl GitRepo {
    /// Get all tag names
    #[instrument(skip(self), fields(repo = %self.path.display()))]
    pub fn tags(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;
        let tags: Vec<String> = names.iter().flatten().map(str::to_string).collect();

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }
}

/// Pick the highest semantic-version tag from a list of tag names.
///
/// Names that do not parse as versions are ignored. When two names parse to
/// the same version the one listed first wins.
pub fn select_latest_tag<I, S>(names: I) -> Option<TagInfo>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versioned: Vec<TagInfo> = names
        .into_iter()
        .filter_map(|name| TagInfo::parse(name.as_ref()))
        .collect();

    versioned.sort_by(|a, b| b.version.cmp(&a.version));
    versioned.into_iter().next()
}

/// Resolve the most recent version tag of a repository
#[instrument(skip(history))]
pub fn resolve_latest_tag<H: History + ?Sized>(history: &H) -> Result<TagInfo> {
    let names = history.tag_names()?;
    let total = names.len();

    let latest = select_latest_tag(&names).ok_or(GitError::NoVersionTag)?;
    info!(tag = %latest.name, version = %latest.version, total, "resolved latest version tag");
    Ok(latest)
}
