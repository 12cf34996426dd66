// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query command implementation.
//!
//! Prints the query-string parameters a storage listing would be sent with.

use std::io;

use super::emit;
use crate::cli::OutputFormat;
use crate::clock::ClockSource;
use crate::error::Result;
use crate::filter::{compile_with_clock, QueryParams, RawArgs};

/// Run the query command.
pub fn run(filters: &RawArgs, format: OutputFormat, clock: &impl ClockSource) -> Result<()> {
    let params = compile_with_clock(filters, clock)?;
    emit(&mut io::stdout().lock(), &render(&params, format)?)
}

/// Render compiled parameters, one `key=value` per line or as a JSON object.
pub fn render(params: &QueryParams, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(params)?),
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
