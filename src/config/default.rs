// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in configuration of this repository.
//!
//! Commits must use one of four types and, when scoped, one of the two
//! workspace members as scope. Everything else is inherited from the
//! conventional commits preset.

use lazy_static::lazy_static;

use super::schema::{Applicability, LintConfig, RuleOverlay, RuleSetting, Severity};

/// Name of the shared preset this configuration extends.
pub const CONVENTIONAL_PRESET: &str = "@commitlint/config-conventional";

/// Rule constraining the commit type.
pub const TYPE_ENUM: &str = "type-enum";

/// Rule constraining the commit scope.
pub const SCOPE_ENUM: &str = "scope-enum";

/// Accepted commit types, in reporting order.
pub const ALLOWED_TYPES: &[&str] = &["chore", "feat", "fix", "refactor"];

/// Accepted commit scopes, in reporting order.
pub const ALLOWED_SCOPES: &[&str] = &["brainfuck", "common"];

lazy_static! {
    static ref BUILTIN_CONFIG: LintConfig = LintConfig {
        extends: vec![CONVENTIONAL_PRESET.to_string()],
        rules: RuleOverlay::new()
            .with_rule(
                TYPE_ENUM,
                RuleSetting::enumeration(
                    Severity::Error,
                    Applicability::Always,
                    ALLOWED_TYPES.iter().copied(),
                ),
            )
            .with_rule(
                SCOPE_ENUM,
                RuleSetting::enumeration(
                    Severity::Error,
                    Applicability::Always,
                    ALLOWED_SCOPES.iter().copied(),
                ),
            ),
    };
}

/// The full built-in configuration record.
pub fn builtin_config() -> &'static LintConfig {
    &BUILTIN_CONFIG
}

/// The rule overlay layered over the inherited presets.
///
/// Always returns the same value.
pub fn rule_overlay() -> &'static RuleOverlay {
    &BUILTIN_CONFIG.rules
}

/// The built-in configuration as a TOML file, for projects that want to
/// check it in and edit it.
pub fn example_config() -> &'static str {
    r#"# commit-rules configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Presets applied first, in order. Rules below replace preset rules of the
# same name entirely; allowed-value lists are never merged.
extends = ["@commitlint/config-conventional"]

# [severity, applicability, values]
#   severity: 0 = disabled, 1 = warning, 2 = error
#   applicability: "always" or "never"
[rules]
type-enum = [2, "always", ["chore", "feat", "fix", "refactor"]]
scope-enum = [2, "always", ["brainfuck", "common"]]
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_overlay() {
        let overlay = rule_overlay();
        assert_eq!(overlay.len(), 2);

        let types = overlay.get(TYPE_ENUM).unwrap();
        assert_eq!(types.severity, Severity::Error);
        assert_eq!(types.applicability, Applicability::Always);
        assert_eq!(types.list_value(TYPE_ENUM).unwrap(), ALLOWED_TYPES);

        let scopes = overlay.get(SCOPE_ENUM).unwrap();
        assert_eq!(scopes.severity, Severity::Error);
        assert_eq!(scopes.list_value(SCOPE_ENUM).unwrap(), ALLOWED_SCOPES);
    }

    #[test]
    fn test_overlay_is_stable() {
        assert!(std::ptr::eq(rule_overlay(), rule_overlay()));
        assert_eq!(rule_overlay(), &builtin_config().rules);
    }

    #[test]
    fn test_builtin_extends_conventional() {
        assert_eq!(builtin_config().extends, vec![CONVENTIONAL_PRESET]);
        assert_eq!(LintConfig::default(), *builtin_config());
    }

    #[test]
    fn test_example_config_matches_builtin() {
        let parsed: LintConfig =
            toml::from_str(example_config()).expect("Example config should parse");
        assert_eq!(&parsed, builtin_config());
    }

    #[test]
    fn test_builtin_round_trips_through_toml() {
        let toml_str = toml::to_string(builtin_config()).unwrap();
        assert!(toml_str.contains("type-enum"));
        let parsed: LintConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(&parsed, builtin_config());
    }
}
