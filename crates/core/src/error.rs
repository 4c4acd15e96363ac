// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the message bus

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a [`BusConfig`](crate::BusConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors returned by a [`PublishQueue`](crate::PublishQueue)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("publish queue closed")]
    Closed,
}
