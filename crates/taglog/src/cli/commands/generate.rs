//! Changelog generation command

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use tracing::info;

use taglog_changelog::{prepend_section, ChangelogGenerator, Section};
use taglog_core::config::{load_config_or_default, validate_config, Config};
use taglog_core::GitBackend;
use taglog_git::{collect_commits, open_history, resolve_latest_tag, History};

use crate::cli::{output, Cli, OutputFormat};

/// Generate a changelog section from the commits since the last version tag
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Section title (defaults to the latest version tag)
    #[arg(long)]
    pub title: Option<String>,

    /// Regular expression a commit line must match to be included
    /// [default: (added|removed|changed|fixed)]
    #[arg(short, long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Print the entries to stdout instead of writing the changelog
    #[arg(long)]
    pub stdout: bool,

    /// Changelog file to prepend to [default: CHANGELOG.md]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Match the pattern case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// How to read tags and commits [default: cli]
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,
}

/// History backend selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// Spawn the git binary
    Cli,
    /// Read the repository through libgit2
    Libgit2,
}

impl From<BackendArg> for GitBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Cli => GitBackend::Cli,
            BackendArg::Libgit2 => GitBackend::Libgit2,
        }
    }
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            title = ?self.title,
            stdout = self.stdout,
            output = ?self.output,
            "executing generate command"
        );
        let cwd = std::env::current_dir()?;
        let (mut config, config_path) = load_config_or_default(&cwd)?;
        if let Some(path) = &config_path {
            info!(path = %path.display(), "using config file");
        }

        self.apply_overrides(&mut config);
        validate_config(&config)?;

        let history = open_history(config.git.backend, &cwd)?;
        let (generator, section) = build_section(history.as_ref(), &config)?;

        if section.is_empty() && !cli.quiet {
            output::warning(&format!(
                "No matching commits since {}",
                output::tag_style().apply_to(&section.tag)
            ));
        }

        let written = deliver(&config, &generator, &section, &cwd, cli.format)?;

        if let Some(path) = written {
            if !cli.quiet {
                output::success(&format!(
                    "Changelog written to {} ({} entries)",
                    output::path_style().apply_to(path.display()),
                    section.entries.len()
                ));
            }
        }

        Ok(())
    }

    /// Layer command-line options over the loaded configuration
    fn apply_overrides(&self, config: &mut Config) {
        let changelog = &mut config.changelog;

        if let Some(title) = &self.title {
            changelog.title = Some(title.clone());
        }
        if let Some(pattern) = &self.pattern {
            changelog.pattern = pattern.clone();
        }
        if let Some(output) = &self.output {
            changelog.output = output.clone();
        }
        if self.stdout {
            changelog.stdout = true;
        }
        if self.ignore_case {
            changelog.ignore_case = true;
        }
        if let Some(backend) = self.backend {
            config.git.backend = backend.into();
        }
    }
}

/// Resolve the tag, collect and filter commits, and build the section
fn build_section(
    history: &dyn History,
    config: &Config,
) -> anyhow::Result<(ChangelogGenerator, Section)> {
    let generator = ChangelogGenerator::new(&config.changelog)?;

    let tag = resolve_latest_tag(history)?;
    let commits = collect_commits(history, &tag)?;

    let title = config
        .changelog
        .title
        .clone()
        .unwrap_or_else(|| tag.name.clone());
    let section = generator.generate(&title, &tag, &commits);

    Ok((generator, section))
}

/// Print the entries or prepend the full section to the changelog file.
///
/// Returns the path written to, or `None` in stdout mode.
fn deliver(
    config: &Config,
    generator: &ChangelogGenerator,
    section: &Section,
    cwd: &Path,
    format: OutputFormat,
) -> anyhow::Result<Option<PathBuf>> {
    if config.changelog.stdout {
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(section)?),
            OutputFormat::Text => print!("{}", generator.format_entries(section)),
        }
        return Ok(None);
    }

    let path = cwd.join(&config.changelog.output);
    prepend_section(&path, &generator.format(section))?;
    Ok(Some(path))
}
