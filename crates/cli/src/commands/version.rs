// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `msgbus version` - Print the bus API version

use msgbus_core::MessageBus;

pub fn version() {
    let bus: MessageBus = MessageBus::new();
    println!("{}", bus.api_version());
}
