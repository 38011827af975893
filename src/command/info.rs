// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identity query.

use serde_json::Value;

use crate::command::Command;

/// Queries firmware/hardware version, MAC address and model (`miIO.info`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InfoCommand;

impl Command for InfoCommand {
    fn name(&self) -> &'static str {
        "miIO.info"
    }

    fn args(&self) -> Vec<Value> {
        Vec::new()
    }
}
