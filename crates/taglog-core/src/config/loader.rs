//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks:
///   1. `<dir>/<name>`          (e.g. `taglog.toml`)
///   2. `<dir>/.github/<name>`  (e.g. `.github/taglog.toml`)
///
/// The first match wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.is_file() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.is_file() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration, falling back to defaults when no file exists.
///
/// A config file that exists but fails to parse or validate is an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            debug!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GitBackend;
    use crate::error::TaglogError;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("taglog.toml");
        std::fs::write(&config_path, "[changelog]\noutput = \"HISTORY.md\"").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_toml_over_yaml() {
        let temp = TempDir::new().unwrap();
        let toml_path = temp.path().join("taglog.toml");
        let yaml_path = temp.path().join("taglog.yaml");
        std::fs::write(&toml_path, "[git]\nbackend = \"cli\"").unwrap();
        std::fs::write(&yaml_path, "git:\n  backend: libgit2").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, toml_path);
    }

    #[test]
    fn test_find_config_in_github_dir() {
        let temp = TempDir::new().unwrap();
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        let config_path = github_dir.join("taglog.toml");
        std::fs::write(&config_path, "[changelog]\nrule_width = 40").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".taglog.yaml");
        std::fs::write(&config_path, "changelog:\n  ignore_case: true\n").unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("taglog.toml");
        std::fs::write(
            &config_path,
            "[changelog]\noutput = \"HISTORY.md\"\npattern = \"^\\\\w+ (feat|fix)\"\n\n[git]\nbackend = \"libgit2\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.changelog.output, PathBuf::from("HISTORY.md"));
        assert_eq!(config.changelog.pattern, "^\\w+ (feat|fix)");
        assert_eq!(config.git.backend, GitBackend::Libgit2);
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("taglog.yaml");
        std::fs::write(
            &config_path,
            "changelog:\n  title: Unreleased\n  rule_width: 20\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.changelog.title.as_deref(), Some("Unreleased"));
        assert_eq!(config.changelog.rule_width, 20);
    }

    #[test]
    fn test_load_config_rejects_bad_pattern() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("taglog.toml");
        std::fs::write(&config_path, "[changelog]\npattern = \"(added\"\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(
            result,
            Err(TaglogError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config.changelog.output, PathBuf::from("CHANGELOG.md"));
    }

    #[test]
    fn test_load_config_or_default_surfaces_parse_errors() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("taglog.toml"), "[changelog\n").unwrap();

        let result = load_config_or_default(temp.path());
        assert!(matches!(
            result,
            Err(TaglogError::Config(ConfigError::TomlError(_)))
        ));
    }
}
