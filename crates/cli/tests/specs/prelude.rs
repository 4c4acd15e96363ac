// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs

#![allow(dead_code)]

pub use assert_cmd::Command;
pub use predicates::prelude::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding a script and optional bus config
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write a file relative to the workspace root and return its path
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

/// A `msgbus` command running in the given workspace
pub fn msgbus(ws: &Workspace) -> Command {
    let mut cmd = Command::cargo_bin("msgbus").unwrap();
    cmd.current_dir(ws.path()).env_remove("RUST_LOG");
    cmd
}

/// Run a script and return its stdout
pub fn run_script(script: &str, extra_args: &[&str]) -> String {
    let ws = Workspace::new();
    ws.file("bus.toml", script);
    let output = msgbus(&ws)
        .arg("run")
        .arg("bus.toml")
        .args(extra_args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "msgbus failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}
