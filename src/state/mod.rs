// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity state types.
//!
//! [`EntityState`] is the view of the washer published to the host.
//! It is only ever modified by applying [`StateChange`] values, whether
//! they come from a poll or from an optimistic update after a command.
//!
//! # Examples
//!
//! ```
//! use mijia_washer::state::{EntityState, StateChange};
//! use mijia_washer::types::PowerState;
//!
//! let mut state = EntityState::new();
//! state.apply(&StateChange::Power(PowerState::On));
//! assert!(state.is_on());
//! ```

mod attributes;
mod entity_state;
mod identity;
mod state_change;

pub use attributes::WasherAttributes;
pub use entity_state::EntityState;
pub use identity::DeviceIdentity;
pub use state_change::StateChange;
