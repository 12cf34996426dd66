// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expressions for storage queries.
//!
//! This module turns per-field user input into the query-string parameters
//! a storage backend understands. Each value takes the form:
//!
//! ```text
//! [op] value
//! ```
//!
//! # Fields
//!
//! - `batch` - single value, sent as typed
//! - `date_changed`, `date_created` - repeatable, datetime values
//!
//! # Operators
//!
//! - `eq` (default when omitted), `lt`, `gt`, `lte`, `gte` (any case)
//!
//! # Values
//!
//! - Text, optionally wrapped in `'...'` or `"..."`
//! - Relative time: `now`, `now-1d`, `now+2h`, `now-30m`, `now+10s`, `now-500ms`
//! - Date or datetime: `2023-01-01`, `2023-02-14T10:09:07.060011Z`
//!
//! # Output keys
//!
//! ```text
//! batch: "eq test"                 batch=test
//! date_changed: "gt 2023-01-01"    date_changed__gt=2023-01-01 00:00:00
//! date_created: "lte now-1d"       date_created__lte=<now minus one day>
//! ```

mod compile;
mod datetime;
mod error;
mod expr;
mod parser;
mod registry;

pub use compile::{compile, compile_with_clock, QueryParams, RawArg, RawArgs};
pub use datetime::{adapt_datetime, parse_iso, resolve_relative, Timestamp};
pub use error::{FilterError, Result};
pub use expr::{Operator, ParsedExpr};
pub use parser::{parse_expression, strip_quotes};
pub use registry::{find_field, identity, list_fields, Adapter, FilterField, ValueKind};
