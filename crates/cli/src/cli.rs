// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::filter::{list_fields, FilterField, RawArg, RawArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "storcom")]
#[command(version, about = "A unified way of working with all your storages.")]
pub struct Cli {
    /// Log what the compiler does (overridden by STORCOM_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile filter options into storage query parameters
    #[command(after_help = "Each filter value is `[op] value` with op one of eq, lt, gt, lte, gte.\n\n\
        Examples:\n  \
        storcom query --batch nightly                     batch=nightly\n  \
        storcom query --batch \"gt 3\"                      batch__gt=3\n  \
        storcom query --date_changed \"gt 2023-01-01\"      date_changed__gt=2023-01-01 00:00:00\n  \
        storcom query --date_changed \"gte now-1d\" \\\n                \
        --date_changed \"lt now\"                   two parameters, relative to now")]
    Query {
        /// Output format (defaults to the config file, then text)
        #[arg(short = 'o', long = "output", value_enum)]
        output: Option<OutputFormat>,
    },

    /// List the fields that can be filtered on
    Fields {
        /// Output format (defaults to the config file, then text)
        #[arg(short = 'o', long = "output", value_enum)]
        output: Option<OutputFormat>,
    },

    /// Generate shell completion script
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// A parsed command line together with the filter options it carried.
#[derive(Debug)]
pub struct Invocation {
    pub cli: Cli,
    /// Raw filter input, keyed by field name. Empty unless the command is `query`.
    pub filters: RawArgs,
}

/// Build the full command, with one `query` option per registered field.
pub fn command() -> clap::Command {
    Cli::command().mut_subcommand("query", |query| {
        list_fields()
            .iter()
            .fold(query, |query, field| query.arg(filter_arg(field)))
    })
}

/// Parse command-line arguments.
pub fn parse_from<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    let filters = matches
        .subcommand_matches("query")
        .map(raw_args_from_matches)
        .unwrap_or_default();
    Ok(Invocation { cli, filters })
}

fn filter_arg(field: &FilterField) -> Arg {
    let (action, help) = if field.multiple {
        (
            ArgAction::Append,
            format!("Filter by {} (repeatable, {} value)", field.name, field.kind.as_str()),
        )
    } else {
        (
            ArgAction::Set,
            format!("Filter by {} ({} value)", field.name, field.kind.as_str()),
        )
    };
    Arg::new(field.name)
        .long(field.name)
        .value_name("EXPR")
        .action(action)
        .help(help)
}

/// Collect the registered filter options present in `matches`.
pub fn raw_args_from_matches(matches: &ArgMatches) -> RawArgs {
    list_fields()
        .iter()
        .filter_map(|field| {
            let arg = if field.multiple {
                let values = matches.get_many::<String>(field.name)?;
                RawArg::Multiple(values.cloned().collect())
            } else {
                RawArg::Single(matches.get_one::<String>(field.name)?.clone())
            };
            Some((field.name.to_string(), arg))
        })
        .collect()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
