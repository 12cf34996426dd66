// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_DIRECTIVE: &str = "warn";
const VERBOSE_DIRECTIVE: &str = "debug";

/// Pick the filter directive: `STORCOM_LOG` wins, then `--verbose`, then warnings only.
pub fn directive(env_filter: Option<String>, verbose: bool) -> String {
    env_filter.unwrap_or_else(|| {
        if verbose {
            VERBOSE_DIRECTIVE.to_string()
        } else {
            DEFAULT_DIRECTIVE.to_string()
        }
    })
}

/// Install the global subscriber. Later calls are no-ops.
pub fn setup_logging(verbose: bool) {
    let wanted = directive(env::log_filter(), verbose);
    let filter = EnvFilter::try_new(&wanted).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
