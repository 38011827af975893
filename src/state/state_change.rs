// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! Both sides of the washer update [`EntityState`](super::EntityState)
//! through these values: the poller applies [`StateChange::Refreshed`] or
//! [`StateChange::Unavailable`], and the command dispatcher applies
//! optimistic changes right after a command was accepted.
//!
//! # Examples
//!
//! ```
//! use mijia_washer::state::{EntityState, StateChange};
//! use mijia_washer::types::{Percentage, Preset};
//!
//! let mut state = EntityState::new();
//!
//! assert!(state.apply(&StateChange::Preset(Preset::Quick)));
//! // Applying the same change again reports no change
//! assert!(!state.apply(&StateChange::Preset(Preset::Quick)));
//!
//! // Preset and percentage are mutually exclusive
//! state.apply(&StateChange::Percentage(Percentage::new(40).unwrap()));
//! assert_eq!(state.preset(), None);
//! ```

use chrono::{DateTime, Utc};

use crate::state::WasherAttributes;
use crate::types::{Percentage, PowerState, Preset, StartPause};

/// Represents a change in entity state.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    /// A fresh set of attributes was fetched from the device.
    Refreshed {
        /// The decoded attributes.
        attributes: WasherAttributes,
        /// When the fetch completed.
        at: DateTime<Utc>,
    },

    /// The device could not be polled; every other field is kept.
    Unavailable,

    /// Power was switched by a local command. Also records the raw state
    /// the device reports next (`off` or `standby`) unless it already
    /// agrees with the new power state.
    Power(PowerState),

    /// A preset was selected locally. Clears the percentage.
    Preset(Preset),

    /// A percentage was set locally. Clears the preset.
    Percentage(Percentage),

    /// The start/pause toggle was driven locally; records the raw state the
    /// device is expected to report next.
    RunState(StartPause),

    /// Multiple changes at once.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates a refresh change stamped with the current time.
    #[must_use]
    pub fn refreshed(attributes: WasherAttributes) -> Self {
        Self::Refreshed {
            attributes,
            at: Utc::now(),
        }
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(changes: Vec<StateChange>) -> Self {
        Self::Batch(changes)
    }
}
