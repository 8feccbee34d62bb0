//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_COMMIT_LINK, DEFAULT_OUTPUT_FILE, DEFAULT_PATTERN, DEFAULT_RULE_WIDTH};

/// Main configuration for taglog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Git configuration
    pub git: GitConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file the section is prepended to
    pub output: PathBuf,

    /// Regular expression a commit line must match to be included
    pub pattern: String,

    /// Match the pattern case-insensitively
    pub ignore_case: bool,

    /// Section title (defaults to the resolved tag)
    pub title: Option<String>,

    /// Commit link target, `{hash}` is replaced with the short hash
    pub commit_link: String,

    /// Width of the separator rule under the section header
    pub rule_width: usize,

    /// Print the entries instead of writing the file
    pub stdout: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            pattern: DEFAULT_PATTERN.to_string(),
            ignore_case: false,
            title: None,
            commit_link: DEFAULT_COMMIT_LINK.to_string(),
            rule_width: DEFAULT_RULE_WIDTH,
            stdout: false,
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// How history is read
    pub backend: GitBackend,
}

/// Source of tags and commit history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitBackend {
    /// Spawn the `git` binary
    #[default]
    Cli,
    /// Read the repository in-process through libgit2
    Libgit2,
}

impl std::fmt::Display for GitBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "cli"),
            Self::Libgit2 => write!(f, "libgit2"),
        }
    }
}
