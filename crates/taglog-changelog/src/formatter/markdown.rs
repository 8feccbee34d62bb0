//! Markdown changelog formatter

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, instrument};

use taglog_core::config::{DEFAULT_COMMIT_LINK, DEFAULT_RULE_WIDTH};
use taglog_git::CommitLine;

use super::ChangelogFormatter;
use crate::types::Section;

/// Leading abbreviated hash of a one-line log entry
static LEADING_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9a-f]+)").expect("Invalid regex"));

/// Timestamp layout of the section header, e.g. `Sun, 18 Oct 2026 09:30:00 GMT`
const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Markdown changelog formatter
pub struct MarkdownFormatter {
    /// Link target template, `{hash}` is substituted
    pub commit_link: String,
    /// Width of the `-` rule below the header
    pub rule_width: usize,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self {
            commit_link: DEFAULT_COMMIT_LINK.to_string(),
            rule_width: DEFAULT_RULE_WIDTH,
        }
    }

    /// Set the commit link template
    pub fn with_commit_link(mut self, template: impl Into<String>) -> Self {
        self.commit_link = template.into();
        self
    }

    /// Set the rule width
    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    fn link_for(&self, hash: &str) -> String {
        self.commit_link.replace("{hash}", hash)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    fn format_commit(&self, commit: &CommitLine) -> String {
        let linked = LEADING_HASH.replace(commit.as_str(), |caps: &Captures<'_>| {
            format!("[{}]({})", &caps[1], self.link_for(&caps[1]))
        });
        format!("- {} \n", linked)
    }

    fn format_header(&self, section: &Section) -> String {
        format!(
            "\n## {}\n> {}\n{}\n\n",
            section.title,
            section.date.format(DATE_FORMAT),
            "-".repeat(self.rule_width)
        )
    }

    #[instrument(skip(self, section), fields(title = %section.title, entry_count = section.entries.len()))]
    fn format(&self, section: &Section) -> String {
        let mut output = self.format_header(section);
        output.push_str(&self.format_entries(section));
        debug!(output_len = output.len(), "markdown section formatted");
        output
    }
}
