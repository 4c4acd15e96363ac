// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bus scripts: a TOML list of steps run against a fresh bus
//!
//! ```toml
//! [[step]]
//! action = "register"
//! event = "tick"
//! subscriber = "logger"
//! handler = "print"
//!
//! [[step]]
//! action = "publish"
//! event = "tick"
//! data = { n = 1 }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Built-in handler behaviours a script can attach to a subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    /// Print the payload to stdout
    #[default]
    Print,
    /// Return an error from the handler
    Fail,
    /// Register without a handler
    None,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Register {
        event: String,
        subscriber: String,
        #[serde(default)]
        handler: HandlerKind,
    },
    Unregister {
        event: String,
        subscriber: String,
    },
    Publish {
        event: String,
        /// Absent data is published as JSON null
        #[serde(default)]
        data: Option<serde_json::Value>,
    },
    Inspect,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from TOML content
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a script file
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
