// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-rules.
//!
//! This module holds the built-in rule overlay, the configuration schema,
//! file discovery and the preset registry used to resolve `extends`.

pub mod default;
mod loader;
mod presets;
mod schema;

pub use default::{
    builtin_config, rule_overlay, ALLOWED_SCOPES, ALLOWED_TYPES, CONVENTIONAL_PRESET, SCOPE_ENUM,
    TYPE_ENUM,
};
pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from, parse_config};
pub use presets::PresetRegistry;
pub use schema::*;
