// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `storcom query` command.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs storcom with an empty config directory so user settings never leak in.
fn storcom(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("storcom");
    cmd.env("STORCOM_HOME", home.path()).env_remove("STORCOM_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).unwrap()
}

// =============================================================================
// Text output
// =============================================================================

#[test]
fn query_without_filters_prints_nothing() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .arg("query")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn query_eq_uses_bare_field_name() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--batch", "eq test"])
        .assert()
        .success()
        .stdout("batch=test\n");
}

#[test]
fn query_operator_suffixes_key() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--batch", "GTE 3"])
        .assert()
        .success()
        .stdout("batch__gte=3\n");
}

#[test]
fn query_strips_quotes() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--batch", "eq 'this is test'"])
        .assert()
        .success()
        .stdout("batch=this is test\n");
}

#[test]
fn query_unprefixed_multi_word_value_reads_first_word_as_operator() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--batch", "'this is test'"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unsupported filter operator ''this'"));
}

#[test]
fn query_date_only_is_midnight() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--date_changed", "gt 2023-01-01"])
        .assert()
        .success()
        .stdout("date_changed__gt=2023-01-01 00:00:00\n");
}

#[test]
fn query_full_iso_keeps_fraction_and_offset() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--date_created", "2023-02-14T10:09:07.060011Z"])
        .assert()
        .success()
        .stdout("date_created=2023-02-14 10:09:07.060011+00:00\n");
}

#[test]
fn query_repeated_field_lines_are_sorted() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(storcom(&home).args([
        "query",
        "--date_changed",
        "lt 2023-02-02",
        "--date_changed",
        "gt 2023-01-01",
        "--batch",
        "nightly",
    ]));
    assert_eq!(
        out,
        "batch=nightly\n\
         date_changed__gt=2023-01-01 00:00:00\n\
         date_changed__lt=2023-02-02 00:00:00\n"
    );
}

#[test]
fn query_repeated_same_operator_last_wins() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args([
            "query",
            "--date_changed",
            "2023-01-01",
            "--date_changed",
            "eq 2023-03-03",
        ])
        .assert()
        .success()
        .stdout("date_changed=2023-03-03 00:00:00\n");
}

#[test]
fn query_relative_time_resolves_to_datetime() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--date_created", "gte now-1d"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(
                r"^date_created__gte=\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(\.\d{6})?\n$",
            )
            .unwrap(),
        );
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn query_json_output() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(storcom(&home).args([
        "query",
        "-o",
        "json",
        "--batch",
        "lt 5",
        "--date_changed",
        "2023-01-01",
    ]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["batch__lt"], "5");
    assert_eq!(value["date_changed"], "2023-01-01 00:00:00");
}

#[test]
fn query_json_without_filters_is_empty_object() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--output", "json"])
        .assert()
        .success()
        .stdout("{}\n");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn query_unsupported_operator_fails() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--batch", "between 2"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "error: unsupported filter operator 'between'",
        ))
        .stderr(predicate::str::contains("eq, lt, gt, lte, gte"));
}

#[test]
fn query_invalid_datetime_fails() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--date_changed", "gt not-a-date"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "error: invalid datetime value 'not-a-date'",
        ));
}

#[test]
fn query_error_prints_no_partial_output() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args([
            "query",
            "--batch",
            "fine",
            "--date_created",
            "garbage",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn query_unknown_field_is_usage_error() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--owner", "me"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn query_single_valued_field_rejects_repeat() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--batch", "a", "--batch", "b"])
        .assert()
        .failure()
        .code(2);
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn query_verbose_logs_to_stderr() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["-v", "query", "--batch", "x"])
        .assert()
        .success()
        .stdout("batch=x\n")
        .stderr(predicate::str::contains("compiled filter parameter"));
}

#[test]
fn query_quiet_by_default() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .args(["query", "--batch", "x"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn query_storcom_log_overrides_verbose() {
    let home = TempDir::new().unwrap();
    storcom(&home)
        .env("STORCOM_LOG", "error")
        .args(["--verbose", "query", "--batch", "x"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
