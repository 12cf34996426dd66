// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! storcom - query remote file storages with human-typed filters.
//!
//! This crate turns per-field filter input such as `gt now-1d` into the
//! query-string parameters a storage backend's listing endpoint expects.
//!
//! # Main Components
//!
//! - [`filter`] - operator parsing, datetime adaptation and the field registry
//! - [`Config`] - user configuration (`config.toml`)
//! - [`ClockSource`] - injectable source of "now" for relative times
//! - [`Error`] - error types for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use storcom::filter::{compile, RawArg, RawArgs};
//!
//! let mut raw = RawArgs::new();
//! raw.insert("date_changed".into(), RawArg::from(vec!["gte now-1d", "lt now"]));
//! let params = compile(&raw)?;
//! ```

mod cli;
mod commands;
mod logging;

pub mod clock;
pub mod config;
pub mod env;
pub mod error;
pub mod filter;

pub use cli::{command, parse_from, Cli, Command, Invocation, OutputFormat};
pub use clock::{ClockSource, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::setup_logging;

/// Execute a parsed invocation.
pub fn run(invocation: Invocation) -> Result<()> {
    let Invocation { cli, filters } = invocation;
    match cli.command {
        Command::Query { output } => {
            let format = resolve_output(output)?;
            commands::query::run(&filters, format, &SystemClock)
        }
        Command::Fields { output } => commands::fields::run(resolve_output(output)?),
        Command::Completion { shell } => {
            commands::completion::run(shell);
            Ok(())
        }
    }
}

/// The `-o` flag wins; otherwise fall back to the config file.
fn resolve_output(flag: Option<OutputFormat>) -> Result<OutputFormat> {
    match flag {
        Some(format) => Ok(format),
        None => Ok(Config::load_default()?.output),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
