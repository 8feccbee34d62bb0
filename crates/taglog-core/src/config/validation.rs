//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    let changelog = &config.changelog;

    if let Err(e) = Regex::new(&changelog.pattern) {
        return Err(ConfigError::InvalidValue {
            field: "changelog.pattern".to_string(),
            message: e.to_string(),
        }
        .into());
    }

    if !changelog.commit_link.contains("{hash}") {
        return Err(ConfigError::InvalidValue {
            field: "changelog.commit_link".to_string(),
            message: "must contain {hash} placeholder".to_string(),
        }
        .into());
    }

    if changelog.rule_width == 0 {
        return Err(ConfigError::InvalidValue {
            field: "changelog.rule_width".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into());
    }

    if changelog.output.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.output".to_string(),
            message: "output path cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_invalid_pattern() {
        let mut config = Config::default();
        config.changelog.pattern = "(fixed".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_link_without_placeholder() {
        let mut config = Config::default();
        config.changelog.commit_link = "../../commit/".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_rule_width() {
        let mut config = Config::default();
        config.changelog.rule_width = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_output() {
        let mut config = Config::default();
        config.changelog.output = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }
}
