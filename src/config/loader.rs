// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, LintError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["commitlint.toml", ".commitlint.toml", ".config/commitlint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    if let Some(found) = find_in_ancestors(start_dir) {
        return Some(found);
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join("commit-rules").join("config.toml");
        if user_config.exists() {
            return Some(user_config);
        }
    }

    None
}

fn find_in_ancestors(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from the default locations, falling back to the
/// built-in configuration.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using built-in configuration");
            Ok(LintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    let config: LintConfig = toml::from_str(content).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    check_config(&config)?;
    Ok(config)
}

/// Sanity checks that serde cannot express.
fn check_config(config: &LintConfig) -> Result<()> {
    for name in &config.extends {
        if name.trim().is_empty() {
            return Err(LintError::Config(ConfigError::InvalidValue {
                key: "extends".to_string(),
                message: "preset names must not be empty".to_string(),
            }));
        }
    }

    for (name, setting) in &config.rules {
        let Some(values) = setting.value.as_ref().and_then(|v| v.as_list()) else {
            continue;
        };

        let mut seen = HashSet::new();
        for value in values {
            if !seen.insert(value.as_str()) {
                tracing::warn!("Rule '{}' lists '{}' more than once", name, value);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Applicability, RuleValue, Severity, SCOPE_ENUM, TYPE_ENUM};

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.extends.is_empty());
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
extends = ["@commitlint/config-conventional"]

[rules]
type-enum = [1, "always", ["feat", "fix"]]
scope-enum = [0]
header-max-length = [2, "always", 100]
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.extends, vec!["@commitlint/config-conventional"]);

        let types = config.rules.get(TYPE_ENUM).unwrap();
        assert_eq!(types.severity, Severity::Warning);
        assert_eq!(types.list_value(TYPE_ENUM).unwrap(), ["feat", "fix"]);

        assert!(!config.rules.get(SCOPE_ENUM).unwrap().is_enabled());

        let header = config.rules.get("header-max-length").unwrap();
        assert_eq!(header.applicability, Applicability::Always);
        assert_eq!(header.value, Some(RuleValue::Number(100)));
    }

    #[test]
    fn test_parse_invalid_severity() {
        let err = parse_config("[rules]\ntype-enum = [3, \"always\", []]\n").unwrap_err();
        assert!(matches!(
            err,
            LintError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_empty_preset_name() {
        let err = parse_config("extends = [\"\"]\n").unwrap_err();
        assert!(matches!(
            err,
            LintError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_duplicate_values_are_accepted() {
        let config = parse_config("[rules]\nscope-enum = [2, \"always\", [\"a\", \"a\"]]\n").unwrap();
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, LintError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_find_config_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("brainfuck").join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let config_path = dir.path().join(".commitlint.toml");
        std::fs::write(&config_path, "[rules]\nscope-enum = [2, \"always\", [\"x\"]]\n").unwrap();

        let found = find_in_ancestors(&nested).unwrap();
        assert_eq!(found, config_path);

        let config = load_config_from(&found).unwrap();
        assert_eq!(
            config.rules.get(SCOPE_ENUM).unwrap().list_value(SCOPE_ENUM).unwrap(),
            ["x"]
        );
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("common");
        std::fs::create_dir_all(nested.join(".config")).unwrap();

        std::fs::write(dir.path().join("commitlint.toml"), "").unwrap();
        let inner = nested.join(".config").join("commitlint.toml");
        std::fs::write(&inner, "").unwrap();

        assert_eq!(find_in_ancestors(&nested).unwrap(), inner);
    }
}
