// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static description of the washer entity.
//!
//! The washer registers with the host as a fan: on/off, a percentage and a
//! preset mode. The descriptor never changes after construction.

use std::ops::BitOr;

use serde::Serialize;

use crate::types::Preset;

/// Icon shown for the washer entity.
pub const ICON: &str = "mdi:washing-machine";

/// Feature flags advertised to the host, using the fan platform's bit values.
///
/// # Examples
///
/// ```
/// use mijia_washer::FanFeatures;
///
/// let features = FanFeatures::SET_SPEED | FanFeatures::PRESET_MODE;
/// assert!(features.contains(FanFeatures::SET_SPEED));
/// assert!(!features.contains(FanFeatures::TURN_ON));
/// assert_eq!(features.bits(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct FanFeatures(u32);

impl FanFeatures {
    /// Percentage control.
    pub const SET_SPEED: Self = Self(1);
    /// Named preset modes.
    pub const PRESET_MODE: Self = Self(8);
    /// Explicit turn off.
    pub const TURN_OFF: Self = Self(16);
    /// Explicit turn on.
    pub const TURN_ON: Self = Self(32);

    /// Returns the raw bit set.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Returns `true` if every flag of `other` is set.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FanFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Registration data for the washer entity.
///
/// # Examples
///
/// ```
/// use mijia_washer::EntityDescriptor;
///
/// let descriptor = EntityDescriptor::new("Laundry");
/// assert_eq!(descriptor.icon, "mdi:washing-machine");
/// assert!(descriptor.should_poll);
/// assert_eq!(descriptor.preset_modes.len(), 26);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    /// Display name.
    pub name: String,
    /// Icon identifier.
    pub icon: &'static str,
    /// The host must poll this entity.
    pub should_poll: bool,
    /// Supported feature flags.
    pub supported_features: FanFeatures,
    /// Advertised preset names: the wash programs, then `pause` and `start`.
    pub preset_modes: Vec<&'static str>,
    /// Number of distinct percentage steps (0-100 in steps of 1).
    pub speed_count: u8,
}

impl EntityDescriptor {
    /// Creates the descriptor for a washer with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: ICON,
            should_poll: true,
            supported_features: FanFeatures::SET_SPEED
                | FanFeatures::PRESET_MODE
                | FanFeatures::TURN_ON
                | FanFeatures::TURN_OFF,
            preset_modes: Preset::names(),
            speed_count: 100,
        }
    }
}
