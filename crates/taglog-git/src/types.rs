//! Git types

use semver::Version;
use serde::{Deserialize, Serialize};

/// A tag whose name parses as a semantic version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// Tag name, exactly as listed by git
    pub name: String,
    /// Version parsed from the tag name
    pub version: Version,
}

impl TagInfo {
    /// Parse a tag name, returning `None` if it is not a semantic version.
    ///
    /// A single leading `v`, `V` or `=` is accepted, so `v1.2.3` and
    /// `1.2.3` both qualify while `release-1.2.3` and `1.2` do not.
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        let candidate = trimmed
            .strip_prefix(['v', 'V', '='])
            .unwrap_or(trimmed);

        Version::parse(candidate).ok().map(|version| Self {
            name: trimmed.to_string(),
            version,
        })
    }
}

impl std::fmt::Display for TagInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// One line of `git log --oneline` output: `<short-hash> <summary>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitLine {
    /// Abbreviated commit hash
    pub hash: String,
    /// Commit subject
    pub summary: String,
    raw: String,
}

impl CommitLine {
    /// Split a raw one-line log entry into hash and summary
    pub fn parse(line: &str) -> Self {
        let raw = line.trim_end_matches(['\r', '\n']).to_string();
        let (hash, summary) = match raw.split_once(' ') {
            Some((hash, summary)) => (hash.to_string(), summary.to_string()),
            None => (raw.clone(), String::new()),
        };

        Self { hash, summary, raw }
    }

    /// Build a line from its parts
    pub fn new(hash: impl Into<String>, summary: impl Into<String>) -> Self {
        let hash = hash.into();
        let summary = summary.into();
        let raw = format!("{} {}", hash, summary);

        Self { hash, summary, raw }
    }

    /// The full line as git prints it
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for CommitLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
