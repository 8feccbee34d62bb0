//! Changelog generation

use taglog_core::config::ChangelogConfig;
use taglog_core::error::ChangelogError;
use taglog_git::{CommitLine, TagInfo};
use tracing::{debug, info, instrument};

use crate::filter::CommitFilter;
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::types::{ChangelogEntry, Section};

/// Changelog generator
pub struct ChangelogGenerator {
    filter: CommitFilter,
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a generator with a Markdown formatter configured from `config`
    pub fn new(config: &ChangelogConfig) -> Result<Self, ChangelogError> {
        let filter = CommitFilter::new(&config.pattern, config.ignore_case)?;
        let formatter = MarkdownFormatter::new()
            .with_commit_link(config.commit_link.clone())
            .with_rule_width(config.rule_width);

        Ok(Self {
            filter,
            formatter: Box::new(formatter),
        })
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Build a section from the commits collected since `tag`
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate(&self, title: &str, tag: &TagInfo, commits: &[CommitLine]) -> Section {
        info!(title, tag = %tag.name, commit_count = commits.len(), "generating changelog section");
        let mut section = Section::new(title, tag.name.clone());

        for commit in self.filter.apply(commits) {
            section.add_entry(ChangelogEntry {
                markdown: self.formatter.format_commit(&commit),
                hash: commit.hash,
                summary: commit.summary,
            });
        }

        debug!(entry_count = section.entries.len(), "changelog entries built");
        section
    }

    /// Render only the entries of a section
    pub fn format_entries(&self, section: &Section) -> String {
        self.formatter.format_entries(section)
    }

    /// Render a section with its header
    pub fn format(&self, section: &Section) -> String {
        self.formatter.format(section)
    }
}
