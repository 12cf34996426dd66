// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fields command implementation.

use std::io;

use serde::Serialize;

use super::emit;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::filter::{list_fields, FilterField};

/// JSON shape of one registered field.
#[derive(Debug, Serialize)]
pub struct FieldJson {
    pub name: &'static str,
    pub multiple: bool,
    pub kind: &'static str,
}

impl From<&FilterField> for FieldJson {
    fn from(field: &FilterField) -> Self {
        FieldJson {
            name: field.name,
            multiple: field.multiple,
            kind: field.kind.as_str(),
        }
    }
}

/// Run the fields command.
pub fn run(format: OutputFormat) -> Result<()> {
    emit(&mut io::stdout().lock(), &render(list_fields(), format)?)
}

/// Render fields as an aligned table or a JSON array.
pub fn render(fields: &[FilterField], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
            Ok(fields
                .iter()
                .map(|f| {
                    let arity = if f.multiple { "multiple" } else { "single" };
                    format!("{:<width$}  {:<8}  {}", f.name, arity, f.kind.as_str())
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
        OutputFormat::Json => {
            let json: Vec<FieldJson> = fields.iter().map(FieldJson::from).collect();
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
