// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule tables and rule implementations keyed by name.

use std::collections::HashMap;

use crate::config::{RuleOverlay, RuleSetting};

use super::builtin::{builtin_rules, Rule};

/// The effective rule parameterizations after composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    settings: RuleOverlay,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: RuleOverlay) -> Self {
        Self { settings }
    }

    /// Compose a base table with an overlay.
    ///
    /// Overlay entries replace base entries of the same name by value;
    /// allowed-value lists are never merged.
    pub fn compose(base: RuleTable, overlay: &RuleOverlay) -> RuleTable {
        base.overlay(overlay)
    }

    /// Apply `overlay` on top of this table.
    pub fn overlay(mut self, overlay: &RuleOverlay) -> Self {
        for (name, setting) in overlay {
            if self.settings.insert(name.clone(), setting.clone()).is_some() {
                tracing::debug!("Overlay replaces base rule '{}'", name);
            }
        }
        self
    }

    pub fn settings(&self) -> &RuleOverlay {
        &self.settings
    }

    pub fn get(&self, name: &str) -> Option<&RuleSetting> {
        self.settings.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RuleSetting)> {
        self.settings.iter()
    }

    /// Entries that are not disabled.
    pub fn enabled(&self) -> impl Iterator<Item = (&String, &RuleSetting)> {
        self.settings.iter().filter(|(_, setting)| setting.is_enabled())
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

/// Rule implementations keyed by rule name.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in rules.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for rule in builtin_rules() {
            registry.register(rule);
        }
        registry
    }

    /// Register a rule, replacing any rule with the same name.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.insert(rule.name().to_string(), rule);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.get(name).map(|rule| rule.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
