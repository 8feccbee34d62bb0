//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "taglog.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "taglog.yaml";

/// Default changelog file
pub const DEFAULT_OUTPUT_FILE: &str = "CHANGELOG.md";

/// Default inclusion pattern for commit lines
pub const DEFAULT_PATTERN: &str = "(added|removed|changed|fixed)";

/// Default commit link target, relative to a hosted `CHANGELOG.md`
pub const DEFAULT_COMMIT_LINK: &str = "../../commit/{hash}";

/// Default separator rule width
pub const DEFAULT_RULE_WIDTH: usize = 80;

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".taglog.toml",
        ".taglog.yaml",
    ]
}
