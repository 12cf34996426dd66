// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for filter value expressions.
//!
//! Splits a raw value like `gt 2023-01-01` or `'this is test'` into a
//! structured [`ParsedExpr`].

use super::error::Result;
use super::expr::{Operator, ParsedExpr};

/// Parse a raw value expression.
///
/// Leading whitespace is ignored and the input is split on the first run of
/// whitespace. A single part is an `eq` literal; otherwise the first part is
/// the operator and the remainder, trailing whitespace included, is the
/// literal. One matching pair of surrounding quotes is then removed
/// from the literal.
///
/// # Examples
///
/// ```ignore
/// let expr = parse_expression("gt 2023-01-01")?;   // Gt, "2023-01-01"
/// let expr = parse_expression("test")?;            // Eq, "test"
/// let expr = parse_expression("eq 'a b'")?;        // Eq, "a b"
/// ```
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedOperator`](super::FilterError) when the
/// operator token is not one of `eq, lt, gt, lte, gte`.
pub fn parse_expression(input: &str) -> Result<ParsedExpr> {
    let input = input.trim_start();

    // Trailing whitespace belongs to the literal once an operator is present.
    let (op, literal) = match input.split_once(char::is_whitespace) {
        None => (Operator::Eq, input),
        Some((token, rest)) if rest.trim().is_empty() => (Operator::Eq, token),
        Some((token, rest)) => (Operator::parse(token)?, rest.trim_start()),
    };

    Ok(ParsedExpr {
        op,
        value: strip_quotes(literal).to_string(),
    })
}

/// Remove one matching pair of `'` or `"` around `s`.
///
/// Mismatched or lone quotes are left in place, as are quotes inside the
/// literal.
pub fn strip_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
