//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::Parser;

use commands::{GenerateCommand, ShellType};

/// taglog - prepend the changes since the last version tag to a changelog
#[derive(Debug, Parser)]
#[command(name = "taglog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format used with --stdout
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<std::path::PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<ShellType>,

    #[command(flatten)]
    pub generate: GenerateCommand,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown entries
    #[default]
    Text,
    /// JSON section
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        if let Some(shell) = self.completions {
            return commands::print_completions(shell);
        }

        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        self.generate.execute(self)
    }
}
