// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bus configuration
//!
//! ```toml
//! failure_policy = "abort"   # or "isolate" (default)
//! log_registry = false       # default true
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What publish does after a handler fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Record the failure and keep notifying the remaining subscribers
    #[default]
    Isolate,
    /// Stop at the first failure; later subscribers are not invoked
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusConfig {
    pub failure_policy: FailurePolicy,
    /// Emit a trace record with the registry contents after each mutation
    pub log_registry: bool,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Isolate,
            log_registry: true,
        }
    }
}

impl BusConfig {
    /// Parse a config from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_log_registry(mut self, enabled: bool) -> Self {
        self.log_registry = enabled;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
