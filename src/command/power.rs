// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power and start/pause commands.

use serde_json::{Value, json};

use crate::command::Command;
use crate::types::{PowerState, StartPause};

/// Command to power the washer on or off.
///
/// # Examples
///
/// ```
/// use mijia_washer::command::{Command, PowerCommand};
///
/// let cmd = PowerCommand::off();
/// assert_eq!(cmd.name(), "set_power");
/// assert_eq!(cmd.args(), vec![serde_json::json!("off")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerCommand {
    state: PowerState,
}

impl PowerCommand {
    /// Creates a command setting the given power state.
    #[must_use]
    pub const fn new(state: PowerState) -> Self {
        Self { state }
    }

    /// Creates a command to power the washer on.
    #[must_use]
    pub const fn on() -> Self {
        Self::new(PowerState::On)
    }

    /// Creates a command to power the washer off.
    #[must_use]
    pub const fn off() -> Self {
        Self::new(PowerState::Off)
    }

    /// Returns the requested power state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.state
    }
}

impl Command for PowerCommand {
    fn name(&self) -> &'static str {
        "set_power"
    }

    fn args(&self) -> Vec<Value> {
        vec![json!(self.state.as_str())]
    }
}

/// Command driving the start/pause toggle of the current program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartPauseCommand {
    action: StartPause,
}

impl StartPauseCommand {
    /// Creates a start/pause command.
    #[must_use]
    pub const fn new(action: StartPause) -> Self {
        Self { action }
    }

    /// Returns the requested action.
    #[must_use]
    pub const fn action(&self) -> StartPause {
        self.action
    }
}

impl Command for StartPauseCommand {
    fn name(&self) -> &'static str {
        "set_startpause"
    }

    fn args(&self) -> Vec<Value> {
        vec![json!(self.action.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on() {
        let cmd = PowerCommand::on();
        assert_eq!(cmd.name(), "set_power");
        assert_eq!(cmd.args(), vec![json!("on")]);
        assert!(cmd.state().is_on());
    }

    #[test]
    fn start_pause() {
        let start = StartPauseCommand::new(StartPause::Start);
        assert_eq!(start.name(), "set_startpause");
        assert_eq!(start.args(), vec![json!("start")]);

        let pause = StartPauseCommand::new(StartPause::Pause);
        assert_eq!(pause.args(), vec![json!("pause")]);
    }
}
