// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint report types.

use console::style;

use crate::config::Severity;
use crate::error::{LintError, Result, RuleViolation, ValidationError};

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Result of linting one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    /// Header of the linted message.
    pub input: String,
    /// Violations of error-severity rules.
    pub errors: Vec<RuleViolation>,
    /// Violations of warning-severity rules.
    pub warnings: Vec<RuleViolation>,
}

impl LintReport {
    /// Create an empty report.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// File a violation under its severity. Disabled rules report nothing.
    pub fn push(&mut self, severity: Severity, violation: RuleViolation) {
        match severity {
            Severity::Error => self.errors.push(violation),
            Severity::Warning => self.warnings.push(violation),
            Severity::Disabled => {}
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the message passes; in strict mode warnings count as errors.
    pub fn passes(&self, strict: bool) -> bool {
        self.is_valid() && !(strict && !self.warnings.is_empty())
    }

    /// Process exit status a consuming tool should use.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if self.passes(strict) {
            0
        } else {
            1
        }
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// The violation reported for `rule`, if any.
    pub fn violation(&self, rule: &str) -> Option<&RuleViolation> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .find(|v| v.rule == rule)
    }

    /// Turn a failing report into an error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(LintError::Validation(ValidationError::Rejected {
                errors: self.errors,
                warnings: self.warnings.len(),
            }))
        }
    }

    /// Render the report.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_text(&self) -> String {
        let mut lines = vec![format!("{}   input: {}", style("⧗").dim(), self.input)];

        for error in &self.errors {
            lines.push(format!("{}   {}", style("✖").red().bold(), error));
        }
        for warning in &self.warnings {
            lines.push(format!("{}   {}", style("⚠").yellow().bold(), warning));
        }

        let status = if self.is_valid() {
            style("✔").green().bold()
        } else {
            style("✖").red().bold()
        };
        lines.push(String::new());
        lines.push(format!(
            "{}   found {} problems, {} warnings",
            status,
            self.errors.len(),
            self.warnings.len()
        ));

        lines.join("\n")
    }

    fn render_json(&self) -> String {
        let issue = |v: &RuleViolation| {
            serde_json::json!({
                "rule": v.rule,
                "field": v.field,
                "value": v.value,
                "allowed": v.allowed,
                "applicability": v.applicability.as_str(),
                "message": v.describe(),
            })
        };

        let json = serde_json::json!({
            "valid": self.is_valid(),
            "input": self.input,
            "errors": self.errors.iter().map(issue).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(issue).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Applicability;

    fn violation(rule: &str, value: &str) -> RuleViolation {
        RuleViolation {
            rule: rule.to_string(),
            field: rule.trim_end_matches("-enum").to_string(),
            value: value.to_string(),
            allowed: vec!["brainfuck".to_string(), "common".to_string()],
            applicability: Applicability::Always,
            message: None,
        }
    }

    #[test]
    fn test_report_valid() {
        let report = LintReport::new("feat: test");
        assert!(report.is_valid());
        assert!(report.passes(true));
        assert_eq!(report.exit_code(false), 0);
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn test_report_with_errors() {
        let mut report = LintReport::new("feat(core): test");
        report.push(Severity::Error, violation("scope-enum", "core"));

        assert!(!report.is_valid());
        assert_eq!(report.exit_code(false), 1);
        assert_eq!(report.violation("scope-enum").unwrap().value, "core");
    }

    #[test]
    fn test_warnings_only_fail_in_strict_mode() {
        let mut report = LintReport::new("feat(core): test");
        report.push(Severity::Warning, violation("scope-enum", "core"));

        assert!(report.is_valid());
        assert!(report.passes(false));
        assert!(!report.passes(true));
        assert_eq!(report.exit_code(true), 1);
    }

    #[test]
    fn test_disabled_is_dropped() {
        let mut report = LintReport::new("x");
        report.push(Severity::Disabled, violation("scope-enum", "core"));
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn test_into_result() {
        assert!(LintReport::new("feat: ok").into_result().is_ok());

        let mut report = LintReport::new("feat(core): no");
        report.push(Severity::Error, violation("scope-enum", "core"));
        let err = report.into_result().unwrap_err();
        match err {
            LintError::Validation(ValidationError::Rejected { errors, warnings }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(warnings, 0);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_render_text() {
        let mut report = LintReport::new("feat(core): test");
        report.push(Severity::Error, violation("scope-enum", "core"));

        let text = console::strip_ansi_codes(&report.render(OutputFormat::Text)).to_string();
        assert!(text.contains("input: feat(core): test"));
        assert!(text.contains("scope 'core' must be one of [brainfuck, common] [scope-enum]"));
        assert!(text.contains("found 1 problems, 0 warnings"));
    }

    #[test]
    fn test_render_json() {
        let mut report = LintReport::new("feat(core): test");
        report.push(Severity::Error, violation("scope-enum", "core"));

        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json)).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["rule"], "scope-enum");
        assert_eq!(json["errors"][0]["allowed"][1], "common");
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_summary() {
        let mut report = LintReport::new("test");
        assert!(report.summary().contains("Valid"));

        report.push(Severity::Warning, violation("type-enum", "docs"));
        assert!(report.summary().contains("1 warnings"));

        report.push(Severity::Error, violation("scope-enum", "core"));
        assert!(report.summary().contains("Invalid"));
    }
}
