// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation.

use std::io::Write;

use clap_complete::{generate, Shell};

use crate::cli;

/// Write the completion script for `shell` to `out`.
pub fn write(shell: Shell, out: &mut dyn Write) {
    let mut cmd = cli::command();
    generate(shell, &mut cmd, "storcom", out);
}

/// Run the completion command.
pub fn run(shell: Shell) {
    write(shell, &mut std::io::stdout());
}

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;
