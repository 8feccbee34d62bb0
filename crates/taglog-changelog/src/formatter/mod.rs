//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use taglog_git::CommitLine;

use crate::types::Section;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render one commit line as a changelog entry
    fn format_commit(&self, commit: &CommitLine) -> String;

    /// Render the section heading placed above the entries
    fn format_header(&self, section: &Section) -> String;

    /// Concatenate the rendered entries of a section
    fn format_entries(&self, section: &Section) -> String {
        section
            .entries
            .iter()
            .map(|entry| entry.markdown.as_str())
            .collect()
    }

    /// Render the full section: header followed by entries
    fn format(&self, section: &Section) -> String {
        let mut output = self.format_header(section);
        output.push_str(&self.format_entries(section));
        output
    }
}
