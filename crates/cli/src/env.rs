// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `STORCOM_HOME` if set and non-empty.
pub fn storcom_home() -> Option<PathBuf> {
    non_empty(vars::STORCOM_HOME).map(PathBuf::from)
}

/// Returns the value of `XDG_CONFIG_HOME` if set and non-empty.
pub fn xdg_config_home() -> Option<PathBuf> {
    non_empty(vars::XDG_CONFIG_HOME).map(PathBuf::from)
}

/// Returns the log filter directive from `STORCOM_LOG`, if set.
pub fn log_filter() -> Option<String> {
    non_empty(vars::STORCOM_LOG)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
