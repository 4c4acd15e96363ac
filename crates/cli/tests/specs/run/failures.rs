// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler failure specs

use crate::prelude::*;

const FAILING_SCRIPT: &str = r#"
[[step]]
action = "register"
event = "e"
subscriber = "first"

[[step]]
action = "register"
event = "e"
subscriber = "broken"
handler = "fail"

[[step]]
action = "register"
event = "e"
subscriber = "last"

[[step]]
action = "publish"
event = "e"
data = 1
"#;

#[test]
fn failure_is_isolated_by_default() {
    let stdout = run_script(FAILING_SCRIPT, &[]);

    similar_asserts::assert_eq!(
        stdout,
        "first <- e: 1\n\
         last <- e: 1\n\
         published e: delivered=2 skipped=0 failed=1\n\
         \x20 failed broken: handler failed: broken is configured to fail\n"
    );
}

#[test]
fn abort_policy_stops_delivery() {
    let ws = Workspace::new();
    ws.file("bus.toml", FAILING_SCRIPT);
    ws.file("config.toml", "failure_policy = \"abort\"\n");

    let output = msgbus(&ws)
        .args(["run", "bus.toml", "--config", "config.toml"])
        .output()
        .unwrap();

    assert!(output.status.success());
    similar_asserts::assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "first <- e: 1\n\
         published e: delivered=1 skipped=0 failed=1 (aborted)\n\
         \x20 failed broken: handler failed: broken is configured to fail\n"
    );
}
