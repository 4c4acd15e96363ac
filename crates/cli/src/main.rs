// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! msgbus - drive an in-process message bus from a script

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod output;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run, version};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "msgbus",
    version,
    about = "In-process publish/subscribe message bus"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a bus script
    Run(run::RunArgs),
    /// Print the bus API version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run::run(args),
        Commands::Version => {
            version::version();
            Ok(())
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` filter
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
