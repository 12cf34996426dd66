// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `config.toml` handling.

#![allow(clippy::unwrap_used)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn storcom(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("storcom");
    cmd.env("STORCOM_HOME", home.path());
    cmd
}

fn write_config(home: &TempDir, content: &str) {
    fs::write(home.path().join("config.toml"), content).unwrap();
}

#[test]
fn config_output_json_is_default_format() {
    let home = TempDir::new().unwrap();
    write_config(&home, "output = \"json\"\n");
    storcom(&home)
        .args(["query", "--batch", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"batch\": \"x\""));
}

#[test]
fn output_flag_overrides_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, "output = \"json\"\n");
    storcom(&home)
        .args(["query", "-o", "text", "--batch", "x"])
        .assert()
        .success()
        .stdout("batch=x\n");
}

#[test]
fn config_unknown_keys_are_ignored() {
    let home = TempDir::new().unwrap();
    write_config(&home, "remote = \"s3\"\n");
    storcom(&home)
        .args(["query", "--batch", "x"])
        .assert()
        .success()
        .stdout("batch=x\n");
}

#[test]
fn config_invalid_output_value_fails() {
    let home = TempDir::new().unwrap();
    write_config(&home, "output = \"yaml\"\n");
    storcom(&home)
        .args(["query", "--batch", "x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: config error: unable to decode"));
}

#[test]
fn config_via_xdg_config_home() {
    let xdg = TempDir::new().unwrap();
    let dir = xdg.path().join("storcom");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "output = \"json\"\n").unwrap();

    cargo_bin_cmd!("storcom")
        .env_remove("STORCOM_HOME")
        .env("XDG_CONFIG_HOME", xdg.path())
        .args(["fields"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn completion_does_not_read_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, "not toml at all [");
    storcom(&home).args(["completion", "fish"]).assert().success();
}
