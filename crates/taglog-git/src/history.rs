//! History source abstraction

use std::path::Path;

use taglog_core::GitBackend;
use tracing::debug;

use crate::cli::GitCli;
use crate::repository::{GitRepo, Result};
use crate::types::CommitLine;

/// Read-only view of the repository history the changelog is built from
pub trait History {
    /// List every tag name in the repository
    fn tag_names(&self) -> Result<Vec<String>>;

    /// List non-merge commits reachable from HEAD but not from `rev`,
    /// newest first
    fn commit_lines_since(&self, rev: &str) -> Result<Vec<CommitLine>>;
}

/// Open the configured history backend for a working directory
pub fn open_history(backend: GitBackend, dir: &Path) -> Result<Box<dyn History>> {
    debug!(%backend, dir = %dir.display(), "opening history backend");
    match backend {
        GitBackend::Cli => Ok(Box::new(GitCli::new(dir))),
        GitBackend::Libgit2 => Ok(Box::new(GitRepo::discover(dir)?)),
    }
}
