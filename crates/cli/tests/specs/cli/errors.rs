// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting specs

use crate::prelude::*;

#[test]
fn missing_script_fails() {
    let ws = Workspace::new();
    msgbus(&ws)
        .args(["run", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: failed to read script missing.toml"));
}

#[test]
fn invalid_script_fails() {
    let ws = Workspace::new();
    ws.file("bus.toml", "[[step]]\naction = \"explode\"\n");
    msgbus(&ws)
        .args(["run", "bus.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: TOML parse error"));
}

#[test]
fn invalid_config_fails() {
    let ws = Workspace::new();
    ws.file("bus.toml", "");
    ws.file("config.toml", "failure_policy = \"retry\"\n");
    msgbus(&ws)
        .args(["run", "bus.toml", "--config", "config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: TOML parse error"));
}

#[test]
fn unknown_subcommand_fails() {
    let ws = Workspace::new();
    msgbus(&ws).arg("explode").assert().failure();
}
