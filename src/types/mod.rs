// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for washer control.
//!
//! Each type ensures values are valid at construction time.
//!
//! # Types
//!
//! - [`Preset`] - Wash program, plus the `pause`/`start` pseudo-presets
//! - [`Percentage`] - Fan-style percentage (0-100)
//! - [`PowerState`] - Argument of `set_power`
//! - [`StartPause`] - Argument of `set_startpause`

mod percentage;
mod power;
mod preset;

pub use percentage::Percentage;
pub use power::{
    PowerState, STATE_OFF, STATE_PAUSE, STATE_RUN, STATE_STANDBY, StartPause, is_on_state,
};
pub use preset::Preset;
