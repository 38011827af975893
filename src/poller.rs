// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic polling.
//!
//! A host that drives polling itself calls [`Washer::poll`] on its own
//! schedule. [`Poller`] is the stand-alone alternative: a background task
//! that polls at the configured interval and publishes every result on the
//! washer's watch channel.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use mijia_washer::protocol::Protocol;
//! use mijia_washer::{Poller, Washer};
//!
//! # async fn example<P: Protocol + Send + Sync + 'static>(washer: Washer<P>) {
//! let handle = Poller::spawn(Arc::new(washer));
//! let mut updates = handle.subscribe();
//! while updates.changed().await.is_ok() {
//!     let state = updates.borrow_and_update().clone();
//!     println!("available={} on={}", state.available(), state.is_on());
//! }
//! # }
//! ```

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::device::Washer;
use crate::protocol::Protocol;
use crate::state::EntityState;

/// Spawns polling tasks.
#[derive(Debug, Clone, Copy)]
pub struct Poller;

impl Poller {
    /// Starts polling `washer` every `poll_interval`, beginning immediately.
    ///
    /// A poll that overruns its slot delays the next one instead of
    /// triggering a burst of catch-up polls.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<P>(washer: Arc<Washer<P>>) -> PollerHandle
    where
        P: Protocol + Send + Sync + 'static,
    {
        let receiver = washer.subscribe();
        let period = washer.config().poll_interval();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            tracing::debug!(washer = %washer.config().name, ?period, "Poller started");

            loop {
                ticker.tick().await;
                let state = washer.poll().await;
                tracing::trace!(
                    washer = %washer.config().name,
                    available = state.available(),
                    on = state.is_on(),
                    "Poll complete"
                );
            }
        });

        PollerHandle { task, receiver }
    }
}

/// Handle to a running poller. Dropping it stops polling.
#[derive(Debug)]
pub struct PollerHandle {
    task: JoinHandle<()>,
    receiver: watch::Receiver<EntityState>,
}

impl PollerHandle {
    /// Returns a new receiver of state updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<EntityState> {
        self.receiver.clone()
    }

    /// Returns the last published state.
    #[must_use]
    pub fn latest(&self) -> EntityState {
        self.receiver.borrow().clone()
    }

    /// Returns `true` while the polling task is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stops polling and waits for the task to wind down.
    pub async fn stop(mut self) {
        self.task.abort();
        // Cancellation is the expected outcome here.
        let _ = (&mut self.task).await;
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
