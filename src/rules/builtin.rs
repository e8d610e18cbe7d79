// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule implementations.

use crate::commit::{CommitField, CommitMessage};
use crate::config::{Applicability, RuleSetting, SCOPE_ENUM, TYPE_ENUM};
use crate::error::{Result, RuleViolation};

/// A named check over one parsed commit message.
///
/// Implementations receive the whole setting so they can honour
/// applicability and read their options; severity is applied by the caller.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Get the rule name.
    fn name(&self) -> &str;

    /// Reject settings this rule cannot work with. Called once, when the
    /// linter is built.
    fn check_setting(&self, _setting: &RuleSetting) -> Result<()> {
        Ok(())
    }

    /// Check the commit message and return a violation if validation fails.
    fn check(&self, message: &CommitMessage, setting: &RuleSetting) -> Option<RuleViolation>;
}

/// Enumeration membership over one field.
///
/// With `always` the field must be one of the listed values; with `never` it
/// must not be. An absent field always passes, presence is a separate rule.
#[derive(Debug, Clone)]
pub struct EnumRule {
    name: String,
    field: CommitField,
}

impl EnumRule {
    pub fn new(name: impl Into<String>, field: CommitField) -> Self {
        Self {
            name: name.into(),
            field,
        }
    }

    /// `type-enum`: membership of the commit type.
    pub fn type_enum() -> Self {
        Self::new(TYPE_ENUM, CommitField::Type)
    }

    /// `scope-enum`: membership of the commit scope.
    pub fn scope_enum() -> Self {
        Self::new(SCOPE_ENUM, CommitField::Scope)
    }

    pub fn field(&self) -> CommitField {
        self.field
    }
}

impl Rule for EnumRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn check_setting(&self, setting: &RuleSetting) -> Result<()> {
        setting.list_value(&self.name).map(|_| ())
    }

    fn check(&self, message: &CommitMessage, setting: &RuleSetting) -> Option<RuleViolation> {
        let value = message.field(self.field)?;
        let allowed = setting
            .value
            .as_ref()
            .and_then(|v| v.as_list())
            .unwrap_or_default();

        // Exact, case-sensitive comparison.
        let listed = allowed.iter().any(|candidate| candidate == value);
        let passed = match setting.applicability {
            Applicability::Always => listed,
            Applicability::Never => !listed,
        };

        if passed {
            None
        } else {
            Some(RuleViolation {
                rule: self.name.clone(),
                field: self.field.as_str().to_string(),
                value: value.to_string(),
                allowed: allowed.to_vec(),
                applicability: setting.applicability,
                message: None,
            })
        }
    }
}

/// The rules this crate implements.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(EnumRule::type_enum()), Box::new(EnumRule::scope_enum())]
}
