// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory client used by unit tests.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

#[derive(Debug, Default)]
pub(crate) struct MockClient {
    properties: Mutex<HashMap<String, Value>>,
    pub(crate) property_requests: Mutex<Vec<Vec<String>>>,
    pub(crate) commands: Mutex<Vec<(String, Vec<Value>)>>,
    fail_reads: Mutex<bool>,
    fail_commands: Mutex<bool>,
    fail_after: Mutex<Option<usize>>,
    reply: Mutex<Option<Value>>,
}

impl MockClient {
    /// A washer that is powered on, idle, with the daily wash selected.
    pub(crate) fn standby() -> Self {
        let client = Self::default();
        client.set("state", json!("standby"));
        client.set("process", json!("options:wash,rinse,spin;processing:wash"));
        client.set("cycle", json!("dailywash"));
        client.set("time_remain", json!(52));
        client.set("child_lock", json!("off"));
        client.set("volume", json!(3));
        client
    }

    pub(crate) fn set(&self, name: &str, value: Value) {
        self.properties.lock().insert(name.to_string(), value);
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        *self.fail_reads.lock() = fail;
    }

    pub(crate) fn fail_commands(&self, fail: bool) {
        *self.fail_commands.lock() = fail;
    }

    /// Accepts the first `accepted` commands, then fails every later one.
    pub(crate) fn fail_commands_after(&self, accepted: usize) {
        *self.fail_after.lock() = Some(accepted);
    }

    /// Replaces the `["ok"]` acknowledgement of state-changing commands.
    pub(crate) fn reply_with(&self, reply: Value) {
        *self.reply.lock() = Some(reply);
    }

    pub(crate) fn command_names(&self) -> Vec<String> {
        self.commands.lock().iter().map(|(n, _)| n.clone()).collect()
    }

    pub(crate) fn read_count(&self) -> usize {
        self.property_requests.lock().len()
    }
}

impl Protocol for MockClient {
    async fn get_properties(&self, names: &[&str]) -> Result<Vec<Value>, ProtocolError> {
        self.property_requests
            .lock()
            .push(names.iter().map(ToString::to_string).collect());
        if *self.fail_reads.lock() {
            return Err(ProtocolError::ConnectionFailed("no route to host".to_string()));
        }
        let properties = self.properties.lock();
        Ok(names
            .iter()
            .map(|name| properties.get(*name).cloned().unwrap_or(Value::Null))
            .collect())
    }

    async fn raw_command(&self, name: &str, args: &[Value]) -> Result<CommandResponse, ProtocolError> {
        let sent = {
            let mut commands = self.commands.lock();
            commands.push((name.to_string(), args.to_vec()));
            commands.len()
        };
        let over_limit = self.fail_after.lock().is_some_and(|accepted| sent > accepted);
        if *self.fail_commands.lock() || over_limit {
            return Err(ProtocolError::ConnectionFailed("no route to host".to_string()));
        }
        if name == "miIO.info" {
            return Ok(CommandResponse::new(json!({
                "fw_ver": "1.2.4_0040",
                "hw_ver": "esp32",
                "mac": "78:11:DC:00:00:01",
                "model": "minij.washer.v5",
                "token": "00000000000000000000000000000000"
            })));
        }
        let reply = self.reply.lock().clone().unwrap_or_else(|| json!(["ok"]));
        Ok(CommandResponse::new(reply))
    }
}
