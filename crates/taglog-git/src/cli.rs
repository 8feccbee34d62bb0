//! History access through the `git` binary

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info, instrument};

use taglog_core::error::GitError;

use crate::history::History;
use crate::repository::Result;
use crate::types::CommitLine;

/// Runs `git` in a working directory and reads its line-oriented output
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Create a runner for the given working directory
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Run `git <args>` and return its stdout.
    ///
    /// Color and column layout are forced off so user config cannot change
    /// the line format.
    #[instrument(skip(self), fields(workdir = %self.workdir.display()))]
    fn run(&self, args: &[&str]) -> Result<String> {
        let start = std::time::Instant::now();
        let output = Command::new("git")
            .args(["-c", "color.ui=never", "-c", "column.ui=never"])
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(GitError::Spawn)?;

        info!(
            args = %args.join(" "),
            duration_ms = start.elapsed().as_millis(),
            success = output.status.success(),
            "git (CLI)"
        );

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Non-empty lines of command output
fn output_lines(stdout: &str) -> impl Iterator<Item = &str> {
    stdout
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
}

impl History for GitCli {
    fn tag_names(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["tag", "--no-column"])?;
        let tags: Vec<String> = output_lines(&stdout).map(|l| l.trim().to_string()).collect();
        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    fn commit_lines_since(&self, rev: &str) -> Result<Vec<CommitLine>> {
        let range = format!("{}..HEAD", rev);
        let stdout = self.run(&["log", "--no-merges", "--oneline", "--no-decorate", "--no-color", &range])?;
        let commits: Vec<CommitLine> = output_lines(&stdout).map(CommitLine::parse).collect();
        debug!(count = commits.len(), range = %range, "listed commits");
        Ok(commits)
    }
}
