//! taglog git - tag and commit history access
//!
//! This crate resolves the latest semantic-version tag and collects the
//! one-line commit summaries made since it. History is read through the
//! [`History`] trait, backed either by the `git` binary ([`GitCli`]) or by
//! libgit2 ([`GitRepo`]).

mod cli;
mod commits;
mod history;
mod repository;
mod tags;
pub mod types;

#[cfg(test)]
mod testing;

pub use cli::GitCli;
pub use commits::collect_commits;
pub use history::{open_history, History};
pub use repository::{GitRepo, Result};
pub use tags::{resolve_latest_tag, select_latest_tag};
pub use types::{CommitLine, TagInfo};
