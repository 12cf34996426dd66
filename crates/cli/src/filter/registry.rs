// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed set of fields a filter can target.

use chrono::{DateTime, Utc};

use super::datetime::adapt_datetime;
use super::error::Result;

/// Per-field transform applied to a literal after operator extraction.
///
/// Receives the literal and the instant "now" was read as for this
/// compilation.
pub type Adapter = fn(&str, DateTime<Utc>) -> Result<String>;

/// How a field's literals are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Literal is sent as typed.
    Text,
    /// Literal is a relative or ISO-8601 datetime.
    Datetime,
}

impl ValueKind {
    /// Returns the adapter for this kind of value.
    pub fn adapter(self) -> Adapter {
        match self {
            ValueKind::Text => identity,
            ValueKind::Datetime => adapt_datetime,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Datetime => "datetime",
        }
    }
}

/// A field the compiler recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    /// Field name, used both as the input key and the output key stem.
    pub name: &'static str,
    /// Whether the field accepts repeated values.
    pub multiple: bool,
    /// Selects the adapter applied to each literal.
    pub kind: ValueKind,
}

impl FilterField {
    /// Transform applied to each literal of this field.
    pub fn adapter(&self) -> Adapter {
        self.kind.adapter()
    }
}

/// Pass the literal through unchanged.
pub fn identity(literal: &str, _now: DateTime<Utc>) -> Result<String> {
    Ok(literal.to_string())
}

static FIELDS: [FilterField; 3] = [
    FilterField {
        name: "batch",
        multiple: false,
        kind: ValueKind::Text,
    },
    FilterField {
        name: "date_changed",
        multiple: true,
        kind: ValueKind::Datetime,
    },
    FilterField {
        name: "date_created",
        multiple: true,
        kind: ValueKind::Datetime,
    },
];

/// Returns the recognized fields in their fixed order.
pub fn list_fields() -> &'static [FilterField] {
    &FIELDS
}

/// Look up a field by name.
pub fn find_field(name: &str) -> Option<&'static FilterField> {
    FIELDS.iter().find(|field| field.name == name)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
