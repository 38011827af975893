// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Washer command definitions.
//!
//! Every user-facing action is translated into one of these typed commands
//! before being handed to [`Protocol::raw_command`](crate::protocol::Protocol::raw_command).
//!
//! # Available Commands
//!
//! | Command Type | Method | Example arguments |
//! |-------------|--------|-------------------|
//! | [`PowerCommand`] | `set_power` | `["on"]` |
//! | [`StartPauseCommand`] | `set_startpause` | `["pause"]` |
//! | [`CycleCommand`] | `set_cycle` | `["quick"]` |
//! | [`InfoCommand`] | `miIO.info` | `[]` |
//!
//! [`PresetCommand`] picks between `set_startpause` and `set_cycle` for a
//! given [`Preset`](crate::types::Preset).
//!
//! # Examples
//!
//! ```
//! use mijia_washer::command::{Command, PresetCommand};
//! use mijia_washer::types::Preset;
//!
//! let cmd = PresetCommand::from(Preset::Pause);
//! assert_eq!(cmd.name(), "set_startpause");
//! assert_eq!(cmd.args(), vec![serde_json::json!("pause")]);
//!
//! let cmd = PresetCommand::from(Preset::Cotton);
//! assert_eq!(cmd.name(), "set_cycle");
//! assert_eq!(cmd.to_call_string(), "set_cycle [\"cotton\"]");
//! ```

mod cycle;
mod info;
mod power;

pub use cycle::{CycleCommand, PresetCommand};
pub use info::InfoCommand;
pub use power::{PowerCommand, StartPauseCommand};

use serde_json::Value;

/// A command that can be sent to the washer.
pub trait Command {
    /// Returns the RPC method name, e.g. `"set_power"`.
    fn name(&self) -> &'static str;

    /// Returns the positional argument list.
    fn args(&self) -> Vec<Value>;

    /// Returns a compact `name [args]` rendering used in logs.
    fn to_call_string(&self) -> String {
        format!("{} {}", self.name(), Value::Array(self.args()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PowerState;

    #[test]
    fn call_string_format() {
        let cmd = PowerCommand::new(PowerState::On);
        assert_eq!(cmd.to_call_string(), "set_power [\"on\"]");
    }

    #[test]
    fn call_string_without_args() {
        assert_eq!(InfoCommand.to_call_string(), "miIO.info []");
    }
}
