//! taglog core - configuration and error handling
//!
//! This crate holds the types shared by every stage of the changelog
//! pipeline: the error taxonomy and the layered configuration.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Config, GitBackend, GitConfig};
pub use error::{ChangelogError, ConfigError, GitError, Result, TaglogError};
