// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Washer configuration.
//!
//! `name`, `host` and `token` are required; everything else has a default.
//! The struct deserializes with serde so hosts can embed it in their own
//! configuration files.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DeviceError;
use crate::telemetry::WASHER_PROPERTIES;

/// Length of a miIO device token, in hex characters.
pub const TOKEN_LEN: usize = 32;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_PROPERTIES_PER_REQUEST: usize = 1;

/// How `start`/`pause` requests are guarded against redundant commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPauseGuard {
    /// Skip the command when the last observed raw state already is
    /// `run` (for start) or `pause` (for pause).
    #[default]
    CompareRawState,
    /// Always send the command.
    Disabled,
}

/// Configuration for one washer.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use mijia_washer::config::{StartPauseGuard, WasherConfig};
///
/// let config = WasherConfig::new("Washer", "192.168.1.60", "0123456789abcdef0123456789abcdef")
///     .with_poll_interval(Duration::from_secs(15))
///     .with_start_pause_guard(StartPauseGuard::Disabled);
/// assert!(config.validate().is_ok());
///
/// let json = r#"{"name":"Washer","host":"192.168.1.60","token":"0123456789abcdef0123456789abcdef"}"#;
/// let config: WasherConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.poll_interval(), Duration::from_secs(30));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasherConfig {
    /// Display name of the entity.
    pub name: String,
    /// Host name or IP address of the washer.
    pub host: String,
    /// miIO token (32 hex characters).
    pub token: String,
    /// Seconds between two polls.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Seconds a property fetch may take before it counts as failed.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    /// How many properties one `get_prop` request may carry.
    #[serde(default = "default_max_properties_per_request")]
    pub max_properties_per_request: usize,
    /// Guard policy for the `start`/`pause` presets.
    #[serde(default)]
    pub start_pause_guard: StartPauseGuard,
    /// Additional properties to poll; their values are published unchanged.
    #[serde(default)]
    pub extra_properties: Vec<String>,
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

fn default_max_properties_per_request() -> usize {
    DEFAULT_MAX_PROPERTIES_PER_REQUEST
}

impl WasherConfig {
    /// Creates a configuration with default optional settings.
    #[must_use]
    pub fn new(name: impl Into<String>, host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            token: token.into(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_properties_per_request: DEFAULT_MAX_PROPERTIES_PER_REQUEST,
            start_pause_guard: StartPauseGuard::default(),
            extra_properties: Vec::new(),
        }
    }

    /// Sets the poll interval (rounded down to whole seconds).
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_secs = interval.as_secs();
        self
    }

    /// Sets the fetch timeout (rounded down to whole seconds).
    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout_secs = timeout.as_secs();
        self
    }

    /// Sets how many properties one request may carry.
    #[must_use]
    pub fn with_max_properties_per_request(mut self, max: usize) -> Self {
        self.max_properties_per_request = max;
        self
    }

    /// Sets the start/pause guard policy.
    #[must_use]
    pub fn with_start_pause_guard(mut self, guard: StartPauseGuard) -> Self {
        self.start_pause_guard = guard;
        self
    }

    /// Adds a property to poll in addition to the built-in set.
    #[must_use]
    pub fn with_extra_property(mut self, name: impl Into<String>) -> Self {
        self.extra_properties.push(name.into());
        self
    }

    /// Returns the poll interval.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Returns the fetch timeout.
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Returns every property polled: the built-in set followed by the
    /// configured extras.
    #[must_use]
    pub fn polled_properties(&self) -> Vec<&str> {
        WASHER_PROPERTIES
            .iter()
            .copied()
            .chain(self.extra_properties.iter().map(String::as_str))
            .collect()
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::InvalidConfiguration` if a required field is
    /// empty, the token is not 32 hex characters, an interval is zero, or an
    /// extra property is empty or duplicates another polled property.
    pub fn validate(&self) -> Result<(), DeviceError> {
        let invalid = |msg: String| Err(DeviceError::InvalidConfiguration(msg));

        if self.name.trim().is_empty() {
            return invalid("name is empty".to_string());
        }
        if self.host.trim().is_empty() {
            return invalid("host is empty".to_string());
        }
        if self.token.len() != TOKEN_LEN || !self.token.chars().all(|c| c.is_ascii_hexdigit()) {
            return invalid(format!("token must be {TOKEN_LEN} hex characters"));
        }
        if self.poll_interval_secs == 0 {
            return invalid("poll interval must be at least one second".to_string());
        }
        if self.fetch_timeout_secs == 0 {
            return invalid("fetch timeout must be at least one second".to_string());
        }
        if self.max_properties_per_request == 0 {
            return invalid("max properties per request must be at least 1".to_string());
        }

        let mut seen: Vec<&str> = WASHER_PROPERTIES.to_vec();
        for name in &self.extra_properties {
            if name.trim().is_empty() {
                return invalid("extra property name is empty".to_string());
            }
            if seen.contains(&name.as_str()) {
                return invalid(format!("property {name} is polled twice"));
            }
            seen.push(name);
        }

        Ok(())
    }
}

impl fmt::Debug for WasherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WasherConfig")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("token", &"<redacted>")
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("max_properties_per_request", &self.max_properties_per_request)
            .field("start_pause_guard", &self.start_pause_guard)
            .field("extra_properties", &self.extra_properties)
            .finish()
    }
}
