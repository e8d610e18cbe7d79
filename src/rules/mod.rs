// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! Rule settings from presets and the configuration overlay are composed
//! into one table, then each enabled rule is checked against a parsed
//! commit message.

mod builtin;
mod engine;
mod table;
mod validator;

pub use builtin::{builtin_rules, EnumRule, Rule};
pub use engine::{Linter, LinterBuilder};
pub use table::{RuleRegistry, RuleTable};
pub use validator::{LintReport, OutputFormat};
