// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static device identity.

use serde::{Deserialize, Serialize};

/// Identity reported by `miIO.info`.
///
/// Read once when the washer is built and cached for its whole lifetime;
/// polling never refreshes it.
///
/// # Examples
///
/// ```
/// use mijia_washer::state::DeviceIdentity;
///
/// let json = r#"{"fw_ver":"1.2.4_0040","hw_ver":"esp32","mac":"78:11:DC:00:00:01","model":"minij.washer.v5","ap":{"rssi":-50}}"#;
/// let identity: DeviceIdentity = serde_json::from_str(json).unwrap();
/// assert_eq!(identity.model.as_deref(), Some("minij.washer.v5"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    /// Firmware version.
    #[serde(default)]
    pub fw_ver: Option<String>,
    /// Hardware platform.
    #[serde(default)]
    pub hw_ver: Option<String>,
    /// Wi-Fi MAC address.
    #[serde(default)]
    pub mac: Option<String>,
    /// Device model identifier.
    #[serde(default)]
    pub model: Option<String>,
}

impl DeviceIdentity {
    /// Returns `true` if no identity field is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fw_ver.is_none() && self.hw_ver.is_none() && self.mac.is_none() && self.model.is_none()
    }
}
