// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while compiling filter expressions.

use thiserror::Error;

/// The single failure kind of the filter compiler.
///
/// Any `FilterError` aborts the whole compilation; no partial parameter map
/// is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unsupported filter operator '{op}'\n  hint: valid operators are: {}", super::Operator::valid_names())]
    UnsupportedOperator { op: String },

    #[error("invalid datetime value '{value}'\n  hint: use an ISO-8601 date or datetime (2023-01-01, 2023-01-01T10:00:00Z) or now[+-N][ms|s|m|h|d]")]
    InvalidDatetime { value: String },
}

/// A specialized Result type for filter compilation.
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
