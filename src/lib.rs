// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `mijia_washer` - Control a Xiaomi Mijia washing machine over miIO.
//!
//! The washer is exposed as a fan-shaped home-automation entity: it can be
//! turned on and off, given a preset mode (a wash program, or the `pause` /
//! `start` pseudo-presets) and a percentage. Its properties are polled
//! periodically and published as a flat attribute record.
//!
//! # Supported Features
//!
//! - **Power control**: Turn the washer on (optionally with a program) and off
//! - **Programs**: 24 wash programs plus start/pause
//! - **Telemetry**: Run state, cycle, process stages, remaining time, child
//!   lock, volume and any extra property you configure
//! - **Identity**: Firmware, hardware, MAC address and model, read once
//!
//! The miIO transport itself is not part of this crate. Plug one in by
//! implementing [`protocol::Protocol`].
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use mijia_washer::{Poller, Washer, WasherConfig};
//! use mijia_washer::protocol::Protocol;
//! use mijia_washer::types::Preset;
//!
//! async fn run<P: Protocol + Send + Sync + 'static>(client: P) -> mijia_washer::Result<()> {
//!     let config = WasherConfig::new("Laundry", "192.168.1.60", "0123456789abcdef0123456789abcdef");
//!
//!     // Reads the device identity with miIO.info
//!     let washer = Arc::new(Washer::builder(config, client).build().await?);
//!
//!     washer.turn_on(Some(Preset::Cotton)).await?;
//!
//!     // Poll in the background and follow updates
//!     let poller = Poller::spawn(Arc::clone(&washer));
//!     let mut updates = poller.subscribe();
//!     while updates.changed().await.is_ok() {
//!         let state = updates.borrow_and_update().clone();
//!         println!("{:?}", state.to_attributes());
//!     }
//!     Ok(())
//! }
//! ```

mod capabilities;
pub mod command;
pub mod config;
mod device;
pub mod error;
pub mod poller;
pub mod protocol;
pub mod state;
pub mod telemetry;
pub mod types;

pub use capabilities::{EntityDescriptor, FanFeatures, ICON};
pub use command::{
    Command, CycleCommand, InfoCommand, PowerCommand, PresetCommand, StartPauseCommand,
};
pub use config::{StartPauseGuard, WasherConfig};
pub use device::{CommandOutcome, Washer, WasherBuilder};
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use poller::{Poller, PollerHandle};
pub use state::{DeviceIdentity, EntityState, StateChange, WasherAttributes};
pub use types::{Percentage, PowerState, Preset, StartPause};
