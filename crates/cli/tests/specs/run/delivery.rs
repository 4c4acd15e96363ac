// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delivery specs: ordering, selectivity and registration rules

use crate::prelude::*;

#[test]
fn publish_reaches_subscribers_of_that_event_only() {
    let stdout = run_script(
        r#"
[[step]]
action = "register"
event = "event1"
subscriber = "s1"

[[step]]
action = "register"
event = "event1"
subscriber = "s2"

[[step]]
action = "register"
event = "event2"
subscriber = "s3"

[[step]]
action = "publish"
event = "event1"
data = "event1 data"
"#,
        &[],
    );

    similar_asserts::assert_eq!(
        stdout,
        "s1 <- event1: \"event1 data\"\n\
         s2 <- event1: \"event1 data\"\n\
         published event1: delivered=2 skipped=0 failed=0\n"
    );
}

#[test]
fn removal_keeps_remaining_order() {
    let stdout = run_script(
        r#"
[[step]]
action = "register"
event = "e"
subscriber = "A"

[[step]]
action = "register"
event = "e"
subscriber = "B"

[[step]]
action = "register"
event = "e"
subscriber = "C"

[[step]]
action = "unregister"
event = "e"
subscriber = "B"

[[step]]
action = "publish"
event = "e"
data = 0
"#,
        &[],
    );

    similar_asserts::assert_eq!(
        stdout,
        "A <- e: 0\nC <- e: 0\npublished e: delivered=2 skipped=0 failed=0\n"
    );
}

#[test]
fn duplicate_registration_keeps_first_handler() {
    let stdout = run_script(
        r#"
[[step]]
action = "register"
event = "e"
subscriber = "s"
handler = "print"

[[step]]
action = "register"
event = "e"
subscriber = "s"
handler = "fail"

[[step]]
action = "publish"
event = "e"
"#,
        &[],
    );

    similar_asserts::assert_eq!(
        stdout,
        "s <- e: null\npublished e: delivered=1 skipped=0 failed=0\n"
    );
}

#[test]
fn inspect_shows_empty_and_unknown_events_differently() {
    let stdout = run_script(
        r#"
[[step]]
action = "inspect"

[[step]]
action = "register"
event = "tick"
subscriber = "a"
handler = "none"

[[step]]
action = "register"
event = "tick"
subscriber = "b"
handler = "none"

[[step]]
action = "inspect"

[[step]]
action = "unregister"
event = "tick"
subscriber = "a"

[[step]]
action = "unregister"
event = "tick"
subscriber = "b"

[[step]]
action = "unregister"
event = "never"
subscriber = "a"

[[step]]
action = "publish"
event = "never"

[[step]]
action = "inspect"
"#,
        &[],
    );

    similar_asserts::assert_eq!(
        stdout,
        "(no events)\n\
         tick: a, b\n\
         published never: delivered=0 skipped=0 failed=0\n\
         tick: (none)\n"
    );
}

#[test]
fn handlerless_subscribers_are_skipped() {
    let stdout = run_script(
        r#"
[[step]]
action = "register"
event = "e"
subscriber = "idle"
handler = "none"

[[step]]
action = "publish"
event = "e"
data = true
"#,
        &[],
    );

    similar_asserts::assert_eq!(
        stdout,
        "published e: delivered=0 skipped=1 failed=0\n"
    );
}
