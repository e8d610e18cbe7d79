// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! A rule setting is written the way commit lint configurations have always
//! spelled it: `[severity, applicability, value]`, e.g.
//! `type-enum = [2, "always", ["chore", "feat"]]`.

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// The exported configuration record.
///
/// `Default` is the built-in configuration of this repository; a file on
/// disk is taken literally, so a missing key there means "empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Presets inherited first, in order.
    #[serde(default)]
    pub extends: Vec<String>,

    /// Rule parameterizations layered over the presets.
    #[serde(default)]
    pub rules: RuleOverlay,
}

impl Default for LintConfig {
    fn default() -> Self {
        super::default::builtin_config().clone()
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// How much a failing rule matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Disabled,
    Warning,
    Error,
}

impl Severity {
    pub fn level(&self) -> u8 {
        match self {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, String> {
        match level {
            0 => Ok(Severity::Disabled),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("severity must be 0, 1 or 2 (got {})", other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a rule asserts its condition or its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }

    /// Phrase used when rendering an enumeration failure.
    pub fn membership_verb(&self) -> &'static str {
        match self {
            Applicability::Always => "must be one of",
            Applicability::Never => "must not be one of",
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(i64),
    Text(String),
    List(Vec<String>),
}

impl RuleValue {
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            RuleValue::List(values) => Some(values),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            RuleValue::Number(_) => "number",
            RuleValue::Text(_) => "string",
            RuleValue::List(_) => "list",
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Number(n) => write!(f, "{}", n),
            RuleValue::Text(s) => write!(f, "{}", s),
            RuleValue::List(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// One rule parameterization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSetting {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: Option<RuleValue>,
}

impl RuleSetting {
    /// An enumeration setting: `[severity, applicability, [values...]]`.
    pub fn enumeration<I, S>(severity: Severity, applicability: Applicability, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            severity,
            applicability,
            value: Some(RuleValue::List(values.into_iter().map(Into::into).collect())),
        }
    }

    /// A setting that turns a rule off.
    pub fn disabled() -> Self {
        Self {
            severity: Severity::Disabled,
            applicability: Applicability::Always,
            value: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Disabled
    }

    /// The value as a string list, or a configuration error naming `rule`.
    pub fn list_value(&self, rule: &str) -> crate::error::Result<&[String]> {
        match &self.value {
            Some(RuleValue::List(values)) => Ok(values),
            Some(other) => Err(crate::error::ConfigError::InvalidValue {
                key: rule.to_string(),
                message: format!("expected a list of strings, found a {}", other.kind()),
            }
            .into()),
            None => Err(crate::error::ConfigError::InvalidValue {
                key: rule.to_string(),
                message: "missing list of allowed values".to_string(),
            }
            .into()),
        }
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.value.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.applicability)?;
        if let Some(ref value) = self.value {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SettingVisitor;

        impl<'de> Visitor<'de> for SettingVisitor {
            type Value = RuleSetting;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array [severity, applicability, value]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleSetting, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let applicability: Applicability = seq.next_element()?.unwrap_or_default();
                let value: Option<RuleValue> = seq.next_element()?;

                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }

                Ok(RuleSetting {
                    severity,
                    applicability,
                    value,
                })
            }
        }

        deserializer.deserialize_seq(SettingVisitor)
    }
}

/// Rule name to setting, keyed uniquely and iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleOverlay(BTreeMap<String, RuleSetting>);

impl RuleOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a rule setting.
    pub fn with_rule(mut self, name: impl Into<String>, setting: RuleSetting) -> Self {
        self.0.insert(name.into(), setting);
        self
    }

    /// Insert a setting, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, setting: RuleSetting) -> Option<RuleSetting> {
        self.0.insert(name.into(), setting)
    }

    pub fn get(&self, name: &str) -> Option<&RuleSetting> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, RuleSetting> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, RuleSetting)> for RuleOverlay {
    fn from_iter<T: IntoIterator<Item = (String, RuleSetting)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleOverlay {
    type Item = (&'a String, &'a RuleSetting);
    type IntoIter = btree_map::Iter<'a, String, RuleSetting>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        rule: RuleSetting,
    }

    fn parse_setting(toml_str: &str) -> Result<RuleSetting, toml::de::Error> {
        toml::from_str::<Wrapper>(toml_str).map(|w| w.rule)
    }

    #[test]
    fn test_severity_levels() {
        assert_eq!(Severity::try_from(2u8), Ok(Severity::Error));
        assert_eq!(u8::from(Severity::Warning), 1);
        assert!(Severity::try_from(3u8).is_err());
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn test_parse_full_setting() {
        let setting = parse_setting(r#"rule = [2, "always", ["feat", "fix"]]"#).unwrap();
        assert_eq!(setting.severity, Severity::Error);
        assert_eq!(setting.applicability, Applicability::Always);
        assert_eq!(
            setting.value,
            Some(RuleValue::List(vec!["feat".to_string(), "fix".to_string()]))
        );
    }

    #[test]
    fn test_parse_short_settings() {
        let disabled = parse_setting("rule = [0]").unwrap();
        assert!(!disabled.is_enabled());
        assert_eq!(disabled.applicability, Applicability::Always);
        assert!(disabled.value.is_none());

        let never = parse_setting(r#"rule = [1, "never"]"#).unwrap();
        assert_eq!(never.severity, Severity::Warning);
        assert_eq!(never.applicability, Applicability::Never);

        let numeric = parse_setting(r#"rule = [2, "always", 100]"#).unwrap();
        assert_eq!(numeric.value, Some(RuleValue::Number(100)));
    }

    #[test]
    fn test_parse_rejects_bad_settings() {
        assert!(parse_setting("rule = [5]").is_err());
        assert!(parse_setting(r#"rule = [2, "sometimes"]"#).is_err());
        assert!(parse_setting("rule = []").is_err());
        assert!(parse_setting(r#"rule = [2, "always", ["a"], "extra"]"#).is_err());
    }

    #[test]
    fn test_list_value() {
        let setting = RuleSetting::enumeration(Severity::Error, Applicability::Always, ["a", "b"]);
        assert_eq!(setting.list_value("x").unwrap(), ["a", "b"]);

        let numeric = RuleSetting {
            severity: Severity::Error,
            applicability: Applicability::Always,
            value: Some(RuleValue::Number(3)),
        };
        let err = numeric.list_value("type-enum").unwrap_err();
        assert!(err.to_string().contains("type-enum"));
        assert!(RuleSetting::disabled().list_value("x").is_err());
    }

    #[test]
    fn test_overlay_keys_replace() {
        let overlay = RuleOverlay::new()
            .with_rule("a", RuleSetting::disabled())
            .with_rule(
                "a",
                RuleSetting::enumeration(Severity::Warning, Applicability::Never, ["x"]),
            );
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay.get("a").unwrap().severity, Severity::Warning);
    }

    #[test]
    fn test_config_file_is_literal() {
        let config: LintConfig = toml::from_str("").unwrap();
        assert!(config.extends.is_empty());
        assert!(config.rules.is_empty());
    }
}
