// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-rules.
//!
//! Lint failures surface as [`RuleViolation`]s inside a report. Everything
//! else (bad configuration, unreadable input) is a [`LintError`].

use crate::config::Applicability;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-rules operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
///
/// These are fatal at startup: a linter is never built from a configuration
/// that produces one of them.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown preset in extends: '{name}'")]
    UnknownPreset { name: String },

    #[error("No implementation registered for rule '{rule}'")]
    UnknownRule { rule: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Commit message errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,
}

/// Overall validation failure.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Commit message rejected: {} errors, {warnings} warnings", .errors.len())]
    Rejected {
        errors: Vec<RuleViolation>,
        warnings: usize,
    },
}

/// A field value rejected by a rule.
///
/// Enumeration rules fill `allowed` and leave `message` empty; other rules set
/// `message` and the enum text is not used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    /// Name of the rule that failed (e.g. `scope-enum`).
    pub rule: String,
    /// Name of the checked field (`type`, `scope`).
    pub field: String,
    /// The rejected value.
    pub value: String,
    /// Allowed (or, under `never`, forbidden) values in configured order.
    pub allowed: Vec<String>,
    /// How membership was interpreted.
    pub applicability: Applicability,
    /// Custom description for rules that are not enumerations.
    pub message: Option<String>,
}

impl RuleViolation {
    /// Replace the enum-shaped description with a custom one.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Human-readable description without the rule tag.
    pub fn describe(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        format!(
            "{} '{}' {} [{}]",
            self.field,
            self.value,
            self.applicability.membership_verb(),
            self.allowed.join(", ")
        )
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.describe(), self.rule)
    }
}

impl std::error::Error for RuleViolation {}

/// Result type alias for commit-rules operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
