// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wash program selection.

use serde_json::{Value, json};

use crate::command::{Command, StartPauseCommand};
use crate::types::{Preset, StartPause};

/// Command selecting a wash program by name.
///
/// Only real programs can be selected; build one through
/// [`PresetCommand::from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleCommand {
    program: Preset,
}

impl CycleCommand {
    /// Returns the selected program.
    #[must_use]
    pub const fn program(&self) -> Preset {
        self.program
    }
}

impl Command for CycleCommand {
    fn name(&self) -> &'static str {
        "set_cycle"
    }

    fn args(&self) -> Vec<Value> {
        vec![json!(self.program.as_str())]
    }
}

/// The device command a preset translates to.
///
/// `pause` and `start` drive the start/pause toggle; every other preset is
/// passed literally to `set_cycle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetCommand {
    /// Select a wash program.
    SelectCycle(CycleCommand),
    /// Start or pause the current program.
    StartPause(StartPauseCommand),
}

impl From<Preset> for PresetCommand {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Pause => Self::StartPause(StartPauseCommand::new(StartPause::Pause)),
            Preset::Start => Self::StartPause(StartPauseCommand::new(StartPause::Start)),
            program => Self::SelectCycle(CycleCommand { program }),
        }
    }
}

impl Command for PresetCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::SelectCycle(cmd) => cmd.name(),
            Self::StartPause(cmd) => cmd.name(),
        }
    }

    fn args(&self) -> Vec<Value> {
        match self {
            Self::SelectCycle(cmd) => cmd.args(),
            Self::StartPause(cmd) => cmd.args(),
        }
    }
}
