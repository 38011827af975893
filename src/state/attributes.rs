// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed attribute record decoded from the polled properties.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::telemetry::ProcessRecord;
use crate::types::is_on_state;

/// Last decoded values of the polled properties.
///
/// Built by [`PropertySet::decode`](crate::telemetry::PropertySet::decode).
/// Values the decoder does not know how to type are kept in [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WasherAttributes {
    pub(crate) state: String,
    pub(crate) process: Option<ProcessRecord>,
    pub(crate) cycle: Option<String>,
    pub(crate) time_remain: Option<u32>,
    pub(crate) child_lock: Option<bool>,
    pub(crate) volume: Option<u32>,
    pub(crate) extra: BTreeMap<String, Value>,
}

impl WasherAttributes {
    /// Raw device state (`off`, `standby`, `run`, `pause`, ...).
    ///
    /// Empty until the first successful poll.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns `true` unless the raw state is `off`.
    #[must_use]
    pub fn is_on(&self) -> bool {
        is_on_state(&self.state)
    }

    /// Decoded process stages.
    #[must_use]
    pub fn process(&self) -> Option<&ProcessRecord> {
        self.process.as_ref()
    }

    /// Raw cycle name reported by the device.
    #[must_use]
    pub fn cycle(&self) -> Option<&str> {
        self.cycle.as_deref()
    }

    /// Remaining time of the running program, in minutes.
    #[must_use]
    pub fn time_remain(&self) -> Option<u32> {
        self.time_remain
    }

    /// Whether the child lock is engaged.
    #[must_use]
    pub fn child_lock(&self) -> Option<bool> {
        self.child_lock
    }

    /// Buzzer volume level.
    #[must_use]
    pub fn volume(&self) -> Option<u32> {
        self.volume
    }

    /// Raw values that are not part of the typed record.
    #[must_use]
    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }
}
