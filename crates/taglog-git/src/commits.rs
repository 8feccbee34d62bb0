//! Commit history operations

use git2::Sort;
use tracing::{debug, info, instrument};

use taglog_core::error::GitError;

use crate::history::History;
use crate::repository::{GitRepo, Result};
use crate::types::{CommitLine, TagInfo};

impl GitRepo {
    /// Get non-merge commits reachable from HEAD but not from `rev`,
    /// newest first
    #[instrument(skip(self), fields(repo = %self.path.display()))]
    pub fn commits_since(&self, rev: &str) -> Result<Vec<CommitLine>> {
        let since = self
            .repo
            .revparse_single(rev)
            .map_err(|e| {
                if e.code() == git2::ErrorCode::NotFound {
                    GitError::RevisionNotFound(rev.to_string())
                } else {
                    GitError::Git2(e)
                }
            })?
            .peel_to_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;
        revwalk.hide(since.id())?;

        let mut commits = Vec::new();
        let mut merges = 0usize;

        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            if commit.parent_count() > 1 {
                merges += 1;
                continue;
            }

            let short_id = commit.as_object().short_id()?;
            let hash = short_id.as_str().unwrap_or_default().to_string();
            let summary = commit.summary().unwrap_or_default().to_string();
            commits.push(CommitLine::new(hash, summary));
        }

        debug!(count = commits.len(), merges, "walked commits since revision");
        Ok(commits)
    }
}

/// Collect the one-line commits made since a tag, newest first
#[instrument(skip(history, tag), fields(tag = %tag.name))]
pub fn collect_commits<H: History + ?Sized>(history: &H, tag: &TagInfo) -> Result<Vec<CommitLine>> {
    let commits = history.commit_lines_since(&tag.name)?;
    info!(count = commits.len(), "collected commits since tag");
    Ok(commits)
}
