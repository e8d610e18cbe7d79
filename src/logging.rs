// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Logging setup for tools embedding the linter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging/tracing.
///
/// With `debug` this crate logs at debug level; otherwise `RUST_LOG` decides,
/// defaulting to warnings. Calling it again after a subscriber is installed
/// does nothing.
pub fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commit_rules=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .is_ok();

    if installed && debug {
        tracing::debug!("Debug logging enabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Stays at the default `warn` level so other tests in this binary are
    // not flooded with debug output.
    #[test]
    fn test_setup_logging_twice() {
        setup_logging(false);
        setup_logging(false);
    }
}
