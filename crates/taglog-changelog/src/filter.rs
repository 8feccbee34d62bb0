//! Commit line filtering

use regex::{Regex, RegexBuilder};
use tracing::debug;

use taglog_core::error::ChangelogError;
use taglog_git::CommitLine;

/// Keeps commit lines whose full text matches a pattern
#[derive(Debug, Clone)]
pub struct CommitFilter {
    regex: Regex,
}

impl CommitFilter {
    /// Compile a filter from a pattern
    pub fn new(pattern: &str, ignore_case: bool) -> Result<Self, ChangelogError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()?;
        Ok(Self { regex })
    }

    /// Check a single line, hash included
    pub fn is_match(&self, commit: &CommitLine) -> bool {
        self.regex.is_match(commit.as_str())
    }

    /// Keep matching lines in their original order
    pub fn apply(&self, commits: &[CommitLine]) -> Vec<CommitLine> {
        let kept: Vec<CommitLine> = commits
            .iter()
            .filter(|c| self.is_match(c))
            .cloned()
            .collect();

        debug!(
            pattern = self.regex.as_str(),
            total = commits.len(),
            kept = kept.len(),
            "filtered commits"
        );
        kept
    }
}
