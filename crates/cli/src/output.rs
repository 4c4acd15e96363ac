// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use msgbus_core::{EventName, SubscriberName};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON document per line
    Json,
}

/// Print output in the specified format.
/// Trailing newlines of the text form are trimmed.
pub fn print<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value.to_string().trim_end()),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string(value) {
                println!("{}", json);
            }
        }
    }
}

/// A payload received by a printing handler
#[derive(Debug, Serialize)]
pub struct Received<'a> {
    pub subscriber: &'a SubscriberName,
    pub event: &'a EventName,
    pub data: &'a serde_json::Value,
}

impl std::fmt::Display for Received<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <- {}: {}", self.subscriber, self.event, self.data)
    }
}
