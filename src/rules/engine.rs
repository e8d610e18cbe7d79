// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use std::path::Path;

use crate::commit::CommitMessage;
use crate::config::{LintConfig, PresetRegistry};
use crate::error::{ConfigError, LintError, Result, ResultExt};

use super::builtin::Rule;
use super::table::{RuleRegistry, RuleTable};
use super::validator::LintReport;

/// Builds a [`Linter`] from a configuration record.
///
/// Building is where configuration mistakes surface: unknown presets,
/// enabled rules nobody implements, and options of the wrong shape.
#[derive(Debug)]
pub struct LinterBuilder {
    config: LintConfig,
    presets: PresetRegistry,
    skip_extends: bool,
    rules: RuleRegistry,
}

impl LinterBuilder {
    /// Start from `config` with the built-in rules registered.
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            presets: PresetRegistry::new(),
            skip_extends: false,
            rules: RuleRegistry::builtin(),
        }
    }

    /// Presets used to resolve `extends`.
    pub fn with_presets(mut self, presets: PresetRegistry) -> Self {
        self.presets = presets;
        self
    }

    /// Ignore `extends` and lint with the configured rules only.
    pub fn skip_extends(mut self) -> Self {
        self.skip_extends = true;
        self
    }

    /// Register an extra rule implementation (e.g. one a preset relies on).
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.register(rule);
        self
    }

    /// Resolve presets, apply the overlay and check every enabled rule.
    pub fn build(self) -> Result<Linter> {
        let base = if self.skip_extends {
            tracing::debug!(
                "Skipping extends ({} presets); linting with configured rules only",
                self.config.extends.len()
            );
            RuleTable::new()
        } else {
            self.presets.resolve(&self.config.extends)?
        };

        let table = RuleTable::compose(base, &self.config.rules);

        for (name, setting) in table.enabled() {
            let rule = self.rules.get(name).ok_or_else(|| {
                LintError::Config(ConfigError::UnknownRule { rule: name.clone() })
            })?;
            rule.check_setting(setting)?;
        }

        tracing::debug!(
            "Linter ready: {} rules, {} enabled",
            table.len(),
            table.enabled().count()
        );

        Ok(Linter {
            table,
            rules: self.rules,
        })
    }
}

/// Lints commit messages against a composed rule table.
///
/// Holds no mutable state; linting the same message twice gives the same
/// report.
#[derive(Debug)]
pub struct Linter {
    table: RuleTable,
    rules: RuleRegistry,
}

impl Linter {
    /// Start building a linter for `config`.
    pub fn builder(config: LintConfig) -> LinterBuilder {
        LinterBuilder::new(config)
    }

    /// The effective rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Validate a commit message.
    pub fn lint(&self, message: &CommitMessage) -> LintReport {
        let mut report = LintReport::new(message.header.clone());

        for (name, setting) in self.table.enabled() {
            // Every enabled rule was resolved when the linter was built.
            let Some(rule) = self.rules.get(name) else {
                continue;
            };

            if let Some(violation) = rule.check(message, setting) {
                tracing::debug!("{} ({}): {}", name, setting.severity, violation.describe());
                report.push(setting.severity, violation);
            }
        }

        report
    }

    /// Validate a commit message string.
    pub fn lint_str(&self, message: &str) -> Result<LintReport> {
        let parsed = CommitMessage::parse(message)?;
        Ok(self.lint(&parsed))
    }

    /// Validate the message file git hands to a `commit-msg` hook.
    pub fn lint_file(&self, path: &Path) -> Result<LintReport> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read commit message {}", path.display()))?;
        self.lint_str(&content)
    }
}
