// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Washer builder.

use crate::command::{Command, InfoCommand};
use crate::config::WasherConfig;
use crate::device::Washer;
use crate::error::{Error, Result};
use crate::protocol::Protocol;
use crate::state::DeviceIdentity;

/// Builder for [`Washer`].
///
/// # Examples
///
/// ```no_run
/// # use mijia_washer::protocol::Protocol;
/// use mijia_washer::{Washer, WasherConfig};
/// use mijia_washer::state::DeviceIdentity;
///
/// # async fn example<P: Protocol + Send + Sync>(client: P, other: P) -> mijia_washer::Result<()> {
/// let config = WasherConfig::new("Laundry", "192.168.1.60", "0123456789abcdef0123456789abcdef");
///
/// // Reads the identity with `miIO.info`
/// let washer = Washer::builder(config.clone(), client).build().await?;
///
/// // Known identity, no network access
/// let identity = DeviceIdentity {
///     model: Some("minij.washer.v5".to_string()),
///     ..DeviceIdentity::default()
/// };
/// let washer = Washer::builder(config, other)
///     .with_identity(identity)
///     .build_without_probe()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WasherBuilder<P: Protocol> {
    config: WasherConfig,
    protocol: P,
    identity: Option<DeviceIdentity>,
}

impl<P: Protocol> WasherBuilder<P> {
    pub(crate) fn new(config: WasherConfig, protocol: P) -> Self {
        Self {
            config,
            protocol,
            identity: None,
        }
    }

    /// Sets the device identity manually (skips the `miIO.info` probe).
    #[must_use]
    pub fn with_identity(mut self, identity: DeviceIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Returns the currently set identity, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&DeviceIdentity> {
        self.identity.as_ref()
    }

    /// Builds the washer, reading its identity unless one was set.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The configuration is invalid
    /// - The `miIO.info` request fails
    /// - The identity reply cannot be decoded
    pub async fn build(self) -> Result<Washer<P>> {
        self.config.validate()?;

        let identity = if let Some(identity) = self.identity {
            identity
        } else {
            let response = self
                .protocol
                .raw_command(InfoCommand.name(), &InfoCommand.args())
                .await
                .map_err(Error::Protocol)?;
            let identity: DeviceIdentity = response.parse().map_err(Error::Parse)?;
            tracing::info!(
                washer = %self.config.name,
                model = identity.model.as_deref().unwrap_or("unknown"),
                fw_ver = identity.fw_ver.as_deref().unwrap_or("unknown"),
                "Washer identified"
            );
            identity
        };

        Ok(Washer::new(self.config, self.protocol, identity))
    }

    /// Builds the washer without any network access.
    ///
    /// If no identity was set, the washer starts with an empty one.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn build_without_probe(self) -> Result<Washer<P>> {
        self.config.validate()?;
        let identity = self.identity.unwrap_or_default();
        Ok(Washer::new(self.config, self.protocol, identity))
    }
}
