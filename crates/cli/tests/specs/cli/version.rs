// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `msgbus version` specs

use crate::prelude::*;

#[test]
fn version_prints_api_version() {
    let ws = Workspace::new();
    msgbus(&ws)
        .arg("version")
        .assert()
        .success()
        .stdout("1.0.0\n");
}

#[test]
fn version_is_independent_of_scripts() {
    let ws = Workspace::new();
    let first = msgbus(&ws).arg("version").output().unwrap();
    run_script(
        "[[step]]\naction = \"register\"\nevent = \"e\"\nsubscriber = \"s\"\n",
        &[],
    );
    let second = msgbus(&ws).arg("version").output().unwrap();
    similar_asserts::assert_eq!(first.stdout, second.stdout);
}
