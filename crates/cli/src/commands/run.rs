// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `msgbus run <script>` - Run a bus script

use anyhow::Result;
use clap::Args;
use msgbus_core::{BusConfig, EventName, MessageBus, Subscriber, SubscriberName};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

use crate::output::{self, OutputFormat, Received};
use crate::script::{HandlerKind, Script, Step};

#[derive(Args)]
pub struct RunArgs {
    /// Path to the TOML script
    pub script: PathBuf,

    /// Bus configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => BusConfig::load(path)?,
        None => BusConfig::default(),
    };
    let script = Script::load(&args.script)?;

    let bus: MessageBus = MessageBus::with_config(config);
    for step in &script.steps {
        execute(&bus, step, args.format);
    }
    Ok(())
}

fn execute(bus: &MessageBus, step: &Step, format: OutputFormat) {
    debug!(?step, "executing step");
    match step {
        Step::Register {
            event,
            subscriber,
            handler,
        } => {
            let event = EventName::from(event.as_str());
            let subscriber = build_subscriber(&event, subscriber, *handler, format);
            bus.register(event, subscriber);
        }
        Step::Unregister { event, subscriber } => {
            bus.unregister(event.as_str(), subscriber.as_str());
        }
        Step::Publish { event, data } => {
            let data = data.clone().unwrap_or(Value::Null);
            let report = bus.publish(event.as_str(), &data);
            output::print(&report, format);
        }
        Step::Inspect => {
            let summary = bus.registry().summary();
            match format {
                OutputFormat::Text if summary.events.is_empty() => println!("(no events)"),
                _ => output::print(&summary, format),
            }
        }
    }
}

fn build_subscriber(
    event: &EventName,
    name: &str,
    kind: HandlerKind,
    format: OutputFormat,
) -> Subscriber<Value> {
    let name = SubscriberName::from(name);
    match kind {
        HandlerKind::Print => {
            let event = event.clone();
            let subscriber = name.clone();
            Subscriber::from_fn(name, move |data: &Value| {
                let received = Received {
                    subscriber: &subscriber,
                    event: &event,
                    data,
                };
                output::print(&received, format);
            })
        }
        HandlerKind::Fail => {
            let subscriber = name.clone();
            Subscriber::new(name, move |_: &Value| {
                Err(format!("{} is configured to fail", subscriber).into())
            })
        }
        HandlerKind::None => Subscriber::without_handler(name),
    }
}
