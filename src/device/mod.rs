// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level washer abstraction.
//!
//! [`Washer`] owns the published [`EntityState`] and is the only thing that
//! changes it. Polling refreshes it from the device; commands update it
//! optimistically and suppress the next poll, because the device keeps
//! reporting its previous state for a while after accepting a command.
//!
//! ```no_run
//! # use mijia_washer::protocol::Protocol;
//! use mijia_washer::{Washer, WasherConfig};
//! use mijia_washer::types::Preset;
//!
//! # async fn example<P: Protocol + Send + Sync>(client: P) -> mijia_washer::Result<()> {
//! let config = WasherConfig::new("Laundry", "192.168.1.60", "0123456789abcdef0123456789abcdef");
//! let washer = Washer::builder(config, client).build().await?;
//!
//! washer.turn_on(Some(Preset::Quick)).await?;
//! let state = washer.poll().await;
//! println!("{:?}", state.to_attributes());
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::WasherBuilder;

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::sync::{Mutex, watch};

use crate::capabilities::EntityDescriptor;
use crate::command::{Command, PowerCommand, PresetCommand};
use crate::config::{StartPauseGuard, WasherConfig};
use crate::error::{Error, ProtocolError, Result};
use crate::protocol::{CommandResponse, Protocol};
use crate::state::{DeviceIdentity, EntityState, StateChange, WasherAttributes};
use crate::telemetry::PropertySet;
use crate::types::{Percentage, PowerState, Preset};

/// Result of a dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The command was sent and acknowledged with this response.
    Sent(CommandResponse),
    /// The device is already in the requested state; nothing was sent.
    Skipped,
    /// The request was not valid for this device and was dropped.
    Ignored,
    /// The change only affects local state; nothing was sent.
    Local,
}

impl CommandOutcome {
    /// Returns `true` if a command reached the device.
    #[must_use]
    pub fn was_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

/// A washing machine exposed as a fan-shaped entity.
///
/// Poll and command operations are serialized per washer: a command never
/// interleaves with a poll, and two polls never overlap.
#[derive(Debug)]
pub struct Washer<P: Protocol> {
    protocol: P,
    config: WasherConfig,
    descriptor: EntityDescriptor,
    state: RwLock<EntityState>,
    skip_update: AtomicBool,
    operation: Mutex<()>,
    state_tx: watch::Sender<EntityState>,
}

impl<P: Protocol> Washer<P> {
    /// Creates a builder for a washer reached through `protocol`.
    pub fn builder(config: WasherConfig, protocol: P) -> WasherBuilder<P> {
        WasherBuilder::new(config, protocol)
    }

    pub(crate) fn new(config: WasherConfig, protocol: P, identity: DeviceIdentity) -> Self {
        let state = EntityState::with_identity(identity);
        let (state_tx, _) = watch::channel(state.clone());
        Self {
            protocol,
            descriptor: EntityDescriptor::new(config.name.clone()),
            config,
            state: RwLock::new(state),
            skip_update: AtomicBool::new(false),
            operation: Mutex::new(()),
            state_tx,
        }
    }

    /// Returns the configuration the washer was built with.
    #[must_use]
    pub fn config(&self) -> &WasherConfig {
        &self.config
    }

    /// Returns the static entity registration data.
    #[must_use]
    pub fn descriptor(&self) -> &EntityDescriptor {
        &self.descriptor
    }

    /// Returns a snapshot of the current entity state.
    #[must_use]
    pub fn state(&self) -> EntityState {
        self.state.read().clone()
    }

    /// Returns the identity cached at construction.
    #[must_use]
    pub fn identity(&self) -> DeviceIdentity {
        self.state.read().identity().clone()
    }

    /// Returns `true` if the next poll will be suppressed.
    #[must_use]
    pub fn is_update_skipped(&self) -> bool {
        self.skip_update.load(Ordering::SeqCst)
    }

    /// Subscribes to state updates. Every poll and every accepted command
    /// publishes the resulting state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<EntityState> {
        self.state_tx.subscribe()
    }

    // ========== Polling ==========

    /// Refreshes the state from the device and returns it.
    ///
    /// Right after a local command this is a no-op returning the current
    /// state unchanged. A failed fetch marks the washer unavailable and keeps
    /// every other field; the error is logged, not returned.
    pub async fn poll(&self) -> EntityState {
        let _operation = self.operation.lock().await;

        if self.skip_update.swap(false, Ordering::SeqCst) {
            tracing::debug!(washer = %self.config.name, "Skipping poll after local command");
            return self.state();
        }

        let change = match self.fetch().await {
            Ok(attributes) => {
                tracing::debug!(washer = %self.config.name, state = %attributes.state(), "Fetched washer state");
                StateChange::refreshed(attributes)
            }
            Err(e) => {
                tracing::error!(washer = %self.config.name, error = %e, "Failed to fetch washer state");
                StateChange::Unavailable
            }
        };
        self.apply(&change)
    }

    async fn fetch(&self) -> Result<WasherAttributes> {
        let timeout = self.config.fetch_timeout();
        if let Ok(result) = tokio::time::timeout(timeout, self.fetch_properties()).await {
            result
        } else {
            let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            Err(ProtocolError::Timeout(millis).into())
        }
    }

    async fn fetch_properties(&self) -> Result<WasherAttributes> {
        let names = self.config.polled_properties();
        let mut set = PropertySet::default();
        for chunk in names.chunks(self.config.max_properties_per_request.max(1)) {
            let values = self.protocol.get_properties(chunk).await?;
            set.extend(PropertySet::from_values(chunk, values)?);
        }
        set.decode().map_err(Error::from)
    }

    fn apply(&self, change: &StateChange) -> EntityState {
        let snapshot = {
            let mut state = self.state.write();
            state.apply(change);
            state.clone()
        };
        self.state_tx.send_replace(snapshot.clone());
        snapshot
    }

    fn after_command(&self, change: &StateChange) {
        self.skip_update.store(true, Ordering::SeqCst);
        self.apply(change);
    }

    // ========== Commands ==========

    /// Sends a command to the device.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn send_command<C: Command + Sync>(&self, command: &C) -> Result<CommandResponse> {
        tracing::debug!(washer = %self.config.name, command = %command.to_call_string(), "Sending washer command");
        let response = self
            .protocol
            .raw_command(command.name(), &command.args())
            .await
            .map_err(Error::Protocol)?;
        tracing::debug!(washer = %self.config.name, result = %response.result(), "Washer command result");
        Ok(response)
    }

    /// Sends a state-changing command and requires an `ok` acknowledgement.
    async fn send_acknowledged<C: Command + Sync>(&self, command: &C) -> Result<CommandResponse> {
        let response = self.send_command(command).await?;
        if response.is_ok() {
            return Ok(response);
        }
        tracing::warn!(washer = %self.config.name, command = command.name(), result = %response.result(), "Washer rejected command");
        Err(ProtocolError::CommandRejected {
            command: command.name().to_string(),
            message: response.result().to_string(),
        }
        .into())
    }

    /// Selects a preset.
    ///
    /// `pause` and `start` drive the start/pause toggle and are subject to
    /// the configured [`StartPauseGuard`]; other presets select the wash
    /// program. Selecting a preset clears the percentage.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails; the state is left unchanged.
    pub async fn set_preset(&self, preset: Preset) -> Result<CommandOutcome> {
        let _operation = self.operation.lock().await;
        self.dispatch_preset(preset).await
    }

    /// Selects a preset by name.
    ///
    /// Names outside the preset list are ignored: nothing is sent, the state
    /// is untouched and [`CommandOutcome::Ignored`] is returned.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_preset_by_name(&self, name: &str) -> Result<CommandOutcome> {
        match name.parse::<Preset>() {
            Ok(preset) => self.set_preset(preset).await,
            Err(e) => {
                tracing::debug!(washer = %self.config.name, error = %e, "Ignoring unsupported preset");
                Ok(CommandOutcome::Ignored)
            }
        }
    }

    async fn dispatch_preset(&self, preset: Preset) -> Result<CommandOutcome> {
        let command = PresetCommand::from(preset);

        let change = match &command {
            PresetCommand::StartPause(cmd) => {
                let action = cmd.action();
                let already_there = {
                    let state = self.state.read();
                    state.attributes().state() == action.resulting_state()
                };
                if self.config.start_pause_guard == StartPauseGuard::CompareRawState
                    && already_there
                {
                    tracing::debug!(washer = %self.config.name, action = %action, "Washer already in requested run state");
                    return Ok(CommandOutcome::Skipped);
                }
                StateChange::batch(vec![
                    StateChange::RunState(action),
                    StateChange::Preset(preset),
                ])
            }
            PresetCommand::SelectCycle(_) => StateChange::Preset(preset),
        };

        let response = self.send_acknowledged(&command).await?;
        self.after_command(&change);
        Ok(CommandOutcome::Sent(response))
    }

    /// Sets the percentage. Nothing is sent to the device; the preset is
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` is greater than 100.
    pub async fn set_percentage(&self, value: u8) -> Result<CommandOutcome> {
        let percentage = Percentage::new(value)?;
        let _operation = self.operation.lock().await;
        self.apply(&StateChange::Percentage(percentage));
        Ok(CommandOutcome::Local)
    }

    /// Turns the washer on.
    ///
    /// Power is only switched if the washer is off. A requested preset is
    /// then dispatched, whether or not power had to be switched. After a
    /// power switch without a preset, [`Preset::DEFAULT`] is seeded.
    ///
    /// # Errors
    ///
    /// Returns error if a command fails. If power was switched but the
    /// preset command then fails, the state shows the washer on with the
    /// preset unchanged, and the next poll is still skipped.
    pub async fn turn_on(&self, preset: Option<Preset>) -> Result<CommandOutcome> {
        let _operation = self.operation.lock().await;

        let mut outcome = CommandOutcome::Skipped;
        let is_on = self.state.read().is_on();
        if !is_on {
            let response = self.send_acknowledged(&PowerCommand::on()).await?;
            self.after_command(&StateChange::Power(PowerState::On));
            outcome = CommandOutcome::Sent(response);
        } else {
            tracing::debug!(washer = %self.config.name, "Washer already on");
        }

        match preset {
            Some(preset) => {
                let preset_outcome = self.dispatch_preset(preset).await?;
                if preset_outcome.was_sent() {
                    outcome = preset_outcome;
                } else if !is_on {
                    self.apply(&StateChange::Preset(preset));
                }
            }
            None if !is_on => {
                self.apply(&StateChange::Preset(Preset::DEFAULT));
            }
            None => {}
        }
        Ok(outcome)
    }

    /// Turns the washer off and zeroes the percentage.
    ///
    /// Power is only switched if the washer is on.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn turn_off(&self) -> Result<CommandOutcome> {
        let _operation = self.operation.lock().await;

        let is_on = self.state.read().is_on();
        if !is_on {
            tracing::debug!(washer = %self.config.name, "Washer already off");
            return Ok(CommandOutcome::Skipped);
        }

        let response = self.send_acknowledged(&PowerCommand::off()).await?;
        self.after_command(&StateChange::batch(vec![
            StateChange::Power(PowerState::Off),
            StateChange::Percentage(Percentage::ZERO),
        ]));
        Ok(CommandOutcome::Sent(response))
    }
}
