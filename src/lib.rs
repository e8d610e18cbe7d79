// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-rules - commit message rules for the brainfuck workspace
//!
//! Commits in this repository follow conventional commits, narrowed to four
//! types and the two workspace members as scopes:
//!
//! - types: `chore`, `feat`, `fix`, `refactor`
//! - scopes: `brainfuck`, `common`
//!
//! Both rules are errors. The rest of the conventional commits preset is
//! inherited through `extends`; its rule table is supplied by the embedding
//! tool through a [`PresetRegistry`](config::PresetRegistry).
//!
//! # Example
//!
//! ```
//! use commit_rules::config::LintConfig;
//! use commit_rules::rules::Linter;
//!
//! let linter = Linter::builder(LintConfig::default())
//!     .skip_extends()
//!     .build()
//!     .unwrap();
//!
//! assert!(linter.lint_str("feat(common): add tape").unwrap().is_valid());
//!
//! let report = linter.lint_str("feat(core): add tape").unwrap();
//! assert!(!report.is_valid());
//! assert_eq!(report.violation("scope-enum").unwrap().allowed, ["brainfuck", "common"]);
//! ```

// Module declarations
pub mod commit;
pub mod config;
pub mod error;
pub mod logging;
pub mod rules;

// Re-exports for convenience
pub use config::{rule_overlay, LintConfig};
pub use error::{LintError, Result};
pub use rules::{LintReport, Linter};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-rules.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
