// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

fn main() {
    let invocation = match storcom::parse_from(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => e.exit(),
    };
    storcom::setup_logging(invocation.cli.verbose);

    if let Err(e) = storcom::run(invocation) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
