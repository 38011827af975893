// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Published entity state.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value, json};

use super::{DeviceIdentity, StateChange, WasherAttributes};
use crate::types::{Percentage, Preset, is_on_state};

/// The view of the washer published to the host after every poll.
///
/// A failed poll only flips [`available`](Self::available) to `false`;
/// attributes, preset and percentage keep their last known values so the
/// host keeps showing stale but valid data.
///
/// # Examples
///
/// ```
/// use mijia_washer::state::EntityState;
///
/// let state = EntityState::new();
/// assert!(!state.is_on());
/// assert_eq!(state.preset(), None);
/// assert!(state.last_updated().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityState {
    available: bool,
    is_on: bool,
    preset: Option<Preset>,
    percentage: Option<Percentage>,
    attributes: WasherAttributes,
    identity: DeviceIdentity,
    last_updated: Option<DateTime<Utc>>,
}

impl Default for EntityState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityState {
    /// Creates the state of a washer that has not been polled yet.
    ///
    /// It starts available, matching a freshly added entity that has not
    /// failed a poll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: true,
            is_on: false,
            preset: None,
            percentage: None,
            attributes: WasherAttributes::default(),
            identity: DeviceIdentity::default(),
            last_updated: None,
        }
    }

    /// Creates an unpolled state carrying the given identity.
    #[must_use]
    pub fn with_identity(identity: DeviceIdentity) -> Self {
        Self {
            identity,
            ..Self::new()
        }
    }

    /// Returns `true` unless the last poll failed.
    #[must_use]
    pub fn available(&self) -> bool {
        self.available
    }

    /// Returns `true` if the washer is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Current preset, derived from the reported cycle or set locally.
    #[must_use]
    pub fn preset(&self) -> Option<Preset> {
        self.preset
    }

    /// Current percentage, if one was set locally.
    #[must_use]
    pub fn percentage(&self) -> Option<Percentage> {
        self.percentage
    }

    /// Last decoded device attributes.
    #[must_use]
    pub fn attributes(&self) -> &WasherAttributes {
        &self.attributes
    }

    /// Identity cached when the washer was built.
    #[must_use]
    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// Time of the last successful fetch.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Applies a state change and returns whether the state actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        let before = self.clone();
        self.apply_inner(change);
        *self != before
    }

    fn apply_inner(&mut self, change: &StateChange) {
        match change {
            StateChange::Refreshed { attributes, at } => {
                self.available = true;
                self.is_on = attributes.is_on();
                let preset = attributes.cycle().and_then(|c| c.parse::<Preset>().ok());
                if preset.is_some() {
                    self.percentage = None;
                }
                self.preset = preset;
                self.attributes = attributes.clone();
                self.last_updated = Some(*at);
            }
            StateChange::Unavailable => self.available = false,
            StateChange::Power(power) => {
                self.is_on = power.is_on();
                if is_on_state(&self.attributes.state) != power.is_on() {
                    self.attributes.state = power.resulting_state().to_string();
                }
            }
            StateChange::Preset(preset) => {
                self.preset = Some(*preset);
                self.percentage = None;
            }
            StateChange::Percentage(percentage) => {
                self.percentage = Some(*percentage);
                self.preset = None;
            }
            StateChange::RunState(action) => {
                self.attributes.state = action.resulting_state().to_string();
                self.is_on = true;
            }
            StateChange::Batch(changes) => {
                for change in changes {
                    self.apply_inner(change);
                }
            }
        }
    }

    /// Renders the flat attribute record published to the host: the raw
    /// device values merged with the cached identity fields.
    ///
    /// Absent values are left out rather than published as `null`.
    #[must_use]
    pub fn to_attributes(&self) -> Map<String, Value> {
        let attrs = &self.attributes;
        let mut map = Map::new();

        if !attrs.state.is_empty() {
            map.insert("state".to_string(), json!(attrs.state));
        }
        if let Some(cycle) = &attrs.cycle {
            map.insert("cycle".to_string(), json!(cycle));
        }
        if let Some(process) = &attrs.process {
            map.insert("process_options".to_string(), json!(process.options()));
            if let Some(current) = process.current() {
                map.insert("process".to_string(), json!(current));
            }
        }
        if let Some(minutes) = attrs.time_remain {
            map.insert("time_remain".to_string(), json!(minutes));
        }
        if let Some(locked) = attrs.child_lock {
            map.insert("child_lock".to_string(), json!(locked));
        }
        if let Some(volume) = attrs.volume {
            map.insert("volume".to_string(), json!(volume));
        }
        for (name, value) in &attrs.extra {
            map.insert(name.clone(), value.clone());
        }

        let identity = [
            ("fw_ver", &self.identity.fw_ver),
            ("hw_ver", &self.identity.hw_ver),
            ("mac", &self.identity.mac),
            ("model", &self.identity.model),
        ];
        for (name, value) in identity {
            if let Some(value) = value {
                map.insert(name.to_string(), json!(value));
            }
        }

        map
    }
}
