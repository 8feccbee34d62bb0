//! Changelog types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single rendered changelog line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Abbreviated commit hash
    pub hash: String,
    /// Commit subject
    pub summary: String,
    /// Markdown bullet, including the trailing newline
    pub markdown: String,
}

/// A titled changelog section for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,
    /// Tag the commits were collected from
    pub tag: String,
    /// Generation time
    pub date: DateTime<Utc>,
    /// Entries, newest commit first
    pub entries: Vec<ChangelogEntry>,
}

impl Section {
    /// Create an empty section stamped with the current time
    pub fn new(title: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tag: tag.into(),
            date: Utc::now(),
            entries: Vec::new(),
        }
    }

    /// Set the date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Add an entry
    pub fn add_entry(&mut self, entry: ChangelogEntry) {
        self.entries.push(entry);
    }

    /// Check if section has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_section() {
        let mut section = Section::new("v1.2.0", "v1.2.0");
        assert!(section.is_empty());

        section.add_entry(ChangelogEntry {
            hash: "abc1234".to_string(),
            summary: "fixed bug".to_string(),
            markdown: "- [abc1234](../../commit/abc1234) fixed bug \n".to_string(),
        });

        assert!(!section.is_empty());
        assert_eq!(section.entries.len(), 1);
    }

    #[test]
    fn test_section_serializes_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let section = Section::new("Next", "v0.9.0").with_date(date);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["title"], "Next");
        assert_eq!(json["tag"], "v0.9.0");
        assert_eq!(json["date"], "2024-03-01T12:00:00Z");
    }
}
