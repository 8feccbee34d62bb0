//! taglog changelog - section generation and output
//!
//! This crate filters commit lines, renders them as Markdown bullets and
//! prepends the resulting section to a changelog file.

pub mod filter;
pub mod formatter;
pub mod generator;
pub mod types;
pub mod writer;

pub use filter::CommitFilter;
pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use types::{ChangelogEntry, Section};
pub use writer::{prepend_section, read_changelog};
