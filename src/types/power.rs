// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power and run-state types.
//!
//! The washer reports a raw `state` string (`off`, `standby`, `run`,
//! `pause`, ...). Only `off` means the machine is powered down; every other
//! value counts as on.

use std::fmt;

/// Raw `state` value reported while the washer is powered down.
pub const STATE_OFF: &str = "off";

/// Raw `state` value reported while powered on with no program running.
pub const STATE_STANDBY: &str = "standby";

/// Raw `state` value reported while a program is running.
pub const STATE_RUN: &str = "run";

/// Raw `state` value reported while a program is paused.
pub const STATE_PAUSE: &str = "pause";

/// Returns whether a raw device `state` string means the washer is on.
///
/// # Examples
///
/// ```
/// use mijia_washer::types::is_on_state;
///
/// assert!(!is_on_state("off"));
/// assert!(is_on_state("run"));
/// assert!(is_on_state("standby"));
/// ```
#[must_use]
pub fn is_on_state(raw: &str) -> bool {
    raw != STATE_OFF
}

/// Power state argument of the `set_power` command.
///
/// # Examples
///
/// ```
/// use mijia_washer::types::PowerState;
///
/// assert_eq!(PowerState::On.as_str(), "on");
/// assert_eq!(PowerState::Off.resulting_state(), "off");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// Power is off.
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns `true` for [`PowerState::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Returns the raw `state` value the device reports right after the
    /// command: `off`, or `standby` until a program is started.
    #[must_use]
    pub const fn resulting_state(&self) -> &'static str {
        match self {
            Self::Off => STATE_OFF,
            Self::On => STATE_STANDBY,
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument of the `set_startpause` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartPause {
    /// Start or resume the selected program.
    Start,
    /// Pause the running program.
    Pause,
}

impl StartPause {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Pause => "pause",
        }
    }

    /// Returns the raw `state` value the device reports once the command
    /// has taken effect.
    #[must_use]
    pub const fn resulting_state(&self) -> &'static str {
        match self {
            Self::Start => STATE_RUN,
            Self::Pause => STATE_PAUSE,
        }
    }
}

impl fmt::Display for StartPause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_off_is_off() {
        assert!(!is_on_state("off"));
        for raw in ["run", "pause", "standby", "finish", "", "OFF"] {
            assert!(is_on_state(raw), "{raw:?} should count as on");
        }
    }

    #[test]
    fn power_resulting_state() {
        assert_eq!(PowerState::Off.resulting_state(), "off");
        assert_eq!(PowerState::On.resulting_state(), "standby");
        assert!(!is_on_state(PowerState::Off.resulting_state()));
        assert!(is_on_state(PowerState::On.resulting_state()));
    }

    #[test]
    fn start_pause_resulting_state() {
        assert_eq!(StartPause::Start.resulting_state(), "run");
        assert_eq!(StartPause::Pause.resulting_state(), "pause");
    }
}
