// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expression types.
//!
//! A raw value such as `gt 2023-01-01` is split into an [`Operator`] and a
//! literal, which together form a [`ParsedExpr`].

use std::fmt;

use super::error::{FilterError, Result};

/// A parsed filter value expression.
///
/// Produced per raw value and consumed immediately by the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpr {
    /// The comparison operator (defaults to `eq`).
    pub op: Operator,
    /// The literal with surrounding quotes removed.
    pub value: String,
}

impl ParsedExpr {
    /// Returns the backend parameter key for this expression on `field`.
    ///
    /// `eq` maps to the bare field name, every other operator to
    /// `field__op` (e.g. `date_changed__gt`).
    pub fn key_for(&self, field: &str) -> String {
        match self.op {
            Operator::Eq => field.to_string(),
            op => format!("{field}__{op}"),
        }
    }
}

/// Comparison operators accepted in filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// Equal (`eq`).
    #[default]
    Eq,
    /// Less than (`lt`).
    Lt,
    /// Greater than (`gt`).
    Gt,
    /// Less than or equal (`lte`).
    Lte,
    /// Greater than or equal (`gte`).
    Gte,
}

impl Operator {
    /// All operators, in the order they are listed to users.
    pub const ALL: [Operator; 5] = [
        Operator::Eq,
        Operator::Lt,
        Operator::Gt,
        Operator::Lte,
        Operator::Gte,
    ];

    /// Parses an operator token, ignoring case.
    ///
    /// The error carries `token` exactly as supplied.
    pub fn parse(token: &str) -> Result<Self> {
        match token.to_lowercase().as_str() {
            "eq" => Ok(Operator::Eq),
            "lt" => Ok(Operator::Lt),
            "gt" => Ok(Operator::Gt),
            "lte" => Ok(Operator::Lte),
            "gte" => Ok(Operator::Gte),
            _ => Err(FilterError::UnsupportedOperator {
                op: token.to_string(),
            }),
        }
    }

    /// Returns the canonical lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Lt => "lt",
            Operator::Gt => "gt",
            Operator::Lte => "lte",
            Operator::Gte => "gte",
        }
    }

    /// Returns valid operator names for error messages.
    pub fn valid_names() -> &'static str {
        "eq, lt, gt, lte, gte"
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
