//! Error types for taglog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TaglogError
pub type Result<T> = std::result::Result<T, TaglogError>;

/// Main error type for taglog operations
#[derive(Debug, Error)]
pub enum TaglogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// The git binary could not be started
    #[error("Failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    /// A git command exited unsuccessfully
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// No tag parses as a semantic version
    #[error("No previous version tag found")]
    NoVersionTag,

    /// Revision could not be resolved
    #[error("Revision not found: {0}")]
    RevisionNotFound(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Inclusion pattern does not compile
    #[error("Invalid commit pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_version_tag_message() {
        let err: TaglogError = GitError::NoVersionTag.into();
        assert_eq!(err.to_string(), "No previous version tag found");
    }

    #[test]
    fn test_command_failed_message() {
        let err = GitError::CommandFailed {
            command: "git log --no-merges --oneline v9.9.9..HEAD".to_string(),
            status: "exit status: 128".to_string(),
            stderr: "fatal: bad revision".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("git log"));
        assert!(msg.contains("fatal: bad revision"));
    }

    #[test]
    fn test_invalid_pattern_is_changelog_error() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: TaglogError = ChangelogError::from(regex_err).into();
        assert!(matches!(err, TaglogError::Changelog(_)));
        assert!(err.to_string().starts_with("Invalid commit pattern"));
    }
}
