//! CLI commands

mod completions;
mod generate;

pub use completions::{print_completions, ShellType};
pub use generate::GenerateCommand;
