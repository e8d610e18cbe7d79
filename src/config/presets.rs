// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Shared presets named in `extends`.
//!
//! The preset rule tables themselves belong to whoever provides them; the
//! registry only maps names to tables and applies them in order.

use std::collections::HashMap;

use crate::error::{ConfigError, LintError, Result};
use crate::rules::RuleTable;

/// Registry of named base rule tables.
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: HashMap<String, RuleTable>,
}

impl PresetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a preset.
    pub fn register(&mut self, name: impl Into<String>, table: RuleTable) {
        self.presets.insert(name.into(), table);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_preset(mut self, name: impl Into<String>, table: RuleTable) -> Self {
        self.register(name, table);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RuleTable> {
        self.presets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Resolve an `extends` list into one base table.
    ///
    /// Later presets replace earlier rules of the same name.
    pub fn resolve(&self, extends: &[String]) -> Result<RuleTable> {
        let mut base = RuleTable::new();

        for name in extends {
            let preset = self.presets.get(name).ok_or_else(|| {
                LintError::Config(ConfigError::UnknownPreset { name: name.clone() })
            })?;

            tracing::debug!("Applying preset '{}' ({} rules)", name, preset.len());
            base = base.overlay(preset.settings());
        }

        Ok(base)
    }
}
