// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output specs

use crate::prelude::*;
use serde_json::{json, Value};

#[test]
fn json_output_is_one_document_per_line() {
    let stdout = run_script(
        r#"
[[step]]
action = "register"
event = "tick"
subscriber = "a"

[[step]]
action = "register"
event = "tick"
subscriber = "b"
handler = "fail"

[[step]]
action = "publish"
event = "tick"
data = { n = 1 }

[[step]]
action = "inspect"
"#,
        &["--format", "json"],
    );

    let docs: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    similar_asserts::assert_eq!(
        docs,
        vec![
            json!({"subscriber": "a", "event": "tick", "data": {"n": 1}}),
            json!({
                "event": "tick",
                "delivered": ["a"],
                "skipped": [],
                "failures": [{
                    "subscriber": "b",
                    "error": {"kind": "handler", "message": "b is configured to fail"}
                }],
                "aborted": false
            }),
            json!({"events": {"tick": ["a", "b"]}}),
        ]
    );
}
