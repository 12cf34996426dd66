// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation of raw per-field filter input into backend query parameters.

use std::collections::{BTreeMap, HashMap};

use crate::clock::{ClockSource, SystemClock};

use super::error::Result;
use super::parser::parse_expression;
use super::registry::{find_field, list_fields};

/// Raw user input for one field: a single value or an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawArg {
    Single(String),
    Multiple(Vec<String>),
}

impl RawArg {
    /// Values that count as provided, in input order.
    ///
    /// Blank strings are treated the same as a missing value.
    pub fn values(&self) -> Vec<&str> {
        let all: Vec<&str> = match self {
            RawArg::Single(value) => vec![value.as_str()],
            RawArg::Multiple(values) => values.iter().map(String::as_str).collect(),
        };
        all.into_iter().filter(|v| !v.trim().is_empty()).collect()
    }

    /// Returns `true` when nothing usable was provided.
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

impl From<&str> for RawArg {
    fn from(value: &str) -> Self {
        RawArg::Single(value.to_string())
    }
}

impl From<String> for RawArg {
    fn from(value: String) -> Self {
        RawArg::Single(value)
    }
}

impl<T: Into<String>> From<Vec<T>> for RawArg {
    fn from(values: Vec<T>) -> Self {
        RawArg::Multiple(values.into_iter().map(Into::into).collect())
    }
}

/// Raw input keyed by field name. Unknown keys are allowed and ignored.
pub type RawArgs = HashMap<String, RawArg>;

/// Backend query-string parameters keyed by parameter name.
pub type QueryParams = BTreeMap<String, String>;

/// Compile raw input against the system clock.
///
/// See [`compile_with_clock`].
pub fn compile(raw: &RawArgs) -> Result<QueryParams> {
    compile_with_clock(raw, &SystemClock)
}

/// Compile raw input into backend query parameters.
///
/// Registered fields are visited in registry order. Each provided value is
/// parsed into an operator and literal, adapted, and written under `field`
/// (for `eq`) or `field__op`. Values are written in input order, so when two
/// values of a multi-valued field produce the same key the last one wins. A
/// single-valued field given a sequence keeps only its last value.
///
/// The clock is read once per call.
///
/// # Errors
///
/// The first [`FilterError`](super::FilterError) aborts compilation; no
/// partial map is returned.
pub fn compile_with_clock(raw: &RawArgs, clock: &impl ClockSource) -> Result<QueryParams> {
    let now = clock.now();
    let mut params = QueryParams::new();

    for key in raw.keys() {
        if find_field(key).is_none() {
            tracing::debug!(field = %key, "ignoring unregistered filter field");
        }
    }

    for field in list_fields() {
        let Some(arg) = raw.get(field.name) else {
            continue;
        };

        let mut values = arg.values();
        let Some(&last) = values.last() else {
            tracing::debug!(field = field.name, "skipping empty filter field");
            continue;
        };
        if !field.multiple {
            values = vec![last];
        }

        let adapt = field.adapter();
        for value in values {
            let expr = parse_expression(value)?;
            let adapted = adapt(&expr.value, now)?;
            let key = expr.key_for(field.name);

            tracing::debug!(%key, value = %adapted, "compiled filter parameter");
            if let Some(previous) = params.insert(key, adapted) {
                tracing::trace!(field = field.name, %previous, "overwrote earlier value");
            }
        }
    }

    Ok(params)
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
