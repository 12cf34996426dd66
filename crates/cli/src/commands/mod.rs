// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::error::Result;

pub mod completion;
pub mod fields;
pub mod query;

/// Write rendered command output followed by a newline. Empty output writes nothing.
pub(crate) fn emit(out: &mut impl Write, rendered: &str) -> Result<()> {
    if !rendered.is_empty() {
        writeln!(out, "{rendered}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
