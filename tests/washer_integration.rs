// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests against a simulated washer.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::{Value, json};

use mijia_washer::protocol::{CommandResponse, Protocol};
use mijia_washer::types::Preset;
use mijia_washer::{
    CommandOutcome, Error, Poller, ProtocolError, StartPauseGuard, Washer, WasherConfig,
};

const TOKEN: &str = "0123456789abcdef0123456789abcdef";

// ============================================================================
// Simulated device
// ============================================================================

/// Behaves like the firmware: accepts commands but keeps reporting the old
/// state until told to catch up with [`FakeWasher::settle`].
#[derive(Debug, Default)]
struct Device {
    reported: serde_json::Map<String, Value>,
    pending: serde_json::Map<String, Value>,
    commands: Vec<String>,
    get_prop_calls: Vec<usize>,
    offline: bool,
    latency: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
struct FakeWasher(Arc<Mutex<Device>>);

impl FakeWasher {
    fn new(state: &str) -> Self {
        let fake = Self::default();
        {
            let mut device = fake.0.lock();
            for (name, value) in [
                ("state", json!(state)),
                ("process", json!("options:soak,wash,rinse,spin;processing:soak")),
                ("cycle", json!("cotton")),
                ("time_remain", json!(95)),
                ("child_lock", json!("on")),
                ("volume", json!(2)),
            ] {
                device.reported.insert(name.to_string(), value);
            }
        }
        fake
    }

    fn settle(&self) {
        let mut device = self.0.lock();
        let pending = std::mem::take(&mut device.pending);
        device.reported.extend(pending);
    }

    fn report(&self, name: &str, value: Value) {
        self.0.lock().reported.insert(name.to_string(), value);
    }

    fn set_offline(&self, offline: bool) {
        self.0.lock().offline = offline;
    }

    fn set_latency(&self, latency: Duration) {
        self.0.lock().latency = Some(latency);
    }

    fn commands(&self) -> Vec<String> {
        self.0.lock().commands.clone()
    }

    fn get_prop_calls(&self) -> Vec<usize> {
        self.0.lock().get_prop_calls.clone()
    }
}

impl Protocol for FakeWasher {
    async fn get_properties(&self, names: &[&str]) -> Result<Vec<Value>, ProtocolError> {
        let latency = {
            let mut device = self.0.lock();
            device.get_prop_calls.push(names.len());
            if device.offline {
                return Err(ProtocolError::ConnectionFailed("timed out".to_string()));
            }
            device.latency
        };
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        let device = self.0.lock();
        Ok(names
            .iter()
            .map(|name| device.reported.get(*name).cloned().unwrap_or(Value::Null))
            .collect())
    }

    async fn raw_command(&self, name: &str, args: &[Value]) -> Result<CommandResponse, ProtocolError> {
        let mut device = self.0.lock();
        if device.offline {
            return Err(ProtocolError::ConnectionFailed("timed out".to_string()));
        }
        if name == "miIO.info" {
            return Ok(CommandResponse::new(json!({
                "model": "minij.washer.v5",
                "fw_ver": "1.2.4_0040",
                "hw_ver": "esp32",
                "mac": "78:11:DC:00:00:01"
            })));
        }
        device
            .commands
            .push(format!("{name} {}", Value::Array(args.to_vec())));

        let arg = args.first().and_then(Value::as_str).unwrap_or_default();
        let update = match (name, arg) {
            ("set_power", "on") => Some(("state", json!("standby"))),
            ("set_power", "off") => Some(("state", json!("off"))),
            ("set_startpause", "start") => Some(("state", json!("run"))),
            ("set_startpause", "pause") => Some(("state", json!("pause"))),
            ("set_cycle", cycle) => Some(("cycle", json!(cycle))),
            _ => None,
        };
        if let Some((property, value)) = update {
            device.pending.insert(property.to_string(), value);
        }
        Ok(CommandResponse::new(json!(["ok"])))
    }
}

fn config() -> WasherConfig {
    WasherConfig::new("Laundry", "192.168.1.60", TOKEN)
}

async fn washer(fake: &FakeWasher, config: WasherConfig) -> Washer<FakeWasher> {
    let washer = Washer::builder(config, fake.clone()).build().await.unwrap();
    washer.poll().await;
    washer
}

// ============================================================================
// Polling
// ============================================================================

mod polling {
    use super::*;

    #[tokio::test]
    async fn publishes_attributes_and_identity() {
        let fake = FakeWasher::new("run");
        let washer = washer(&fake, config()).await;

        let state = washer.state();
        assert!(state.available());
        assert!(state.is_on());
        assert_eq!(state.preset(), Some(Preset::Cotton));

        let attrs = state.to_attributes();
        assert_eq!(attrs["state"], "run");
        assert_eq!(attrs["cycle"], "cotton");
        assert_eq!(attrs["process"], "浸泡");
        assert_eq!(attrs["process_options"], json!(["浸泡", "主洗", "漂洗", "脱水"]));
        assert_eq!(attrs["time_remain"], 95);
        assert_eq!(attrs["child_lock"], true);
        assert_eq!(attrs["volume"], 2);
        assert_eq!(attrs["model"], "minij.washer.v5");
        assert_eq!(attrs["fw_ver"], "1.2.4_0040");
    }

    #[tokio::test]
    async fn one_property_per_request_by_default() {
        let fake = FakeWasher::new("standby");
        washer(&fake, config()).await;
        assert_eq!(fake.get_prop_calls(), [1, 1, 1, 1, 1, 1]);
    }

    #[tokio::test]
    async fn batches_properties_when_configured() {
        let fake = FakeWasher::new("standby");
        washer(&fake, config().with_max_properties_per_request(16)).await;
        assert_eq!(fake.get_prop_calls(), [6]);
    }

    #[tokio::test]
    async fn extra_properties_are_published_raw() {
        let fake = FakeWasher::new("standby");
        fake.report("dry_mode", json!("smart"));
        let washer = washer(&fake, config().with_extra_property("dry_mode")).await;
        assert_eq!(washer.state().to_attributes()["dry_mode"], "smart");
    }

    #[tokio::test]
    async fn outage_marks_unavailable_and_keeps_last_values() {
        let fake = FakeWasher::new("run");
        let washer = washer(&fake, config()).await;
        let before = washer.state();

        fake.set_offline(true);
        let state = washer.poll().await;
        assert!(!state.available());
        assert_eq!(state.preset(), Some(Preset::Cotton));
        assert_eq!(state.attributes(), before.attributes());
        assert_eq!(state.last_updated(), before.last_updated());

        fake.set_offline(false);
        assert!(washer.poll().await.available());
    }

    #[tokio::test]
    async fn malformed_process_marks_unavailable() {
        let fake = FakeWasher::new("run");
        let washer = washer(&fake, config()).await;

        fake.report("process", json!("options:wash"));
        let state = washer.poll().await;
        assert!(!state.available());
        assert_eq!(state.to_attributes()["process"], "浸泡");
    }

    #[tokio::test(start_paused = true)]
    async fn slow_fetch_times_out() {
        let fake = FakeWasher::new("run");
        let washer = washer(&fake, config().with_fetch_timeout(Duration::from_secs(5))).await;
        assert!(washer.state().available());

        fake.set_latency(Duration::from_secs(2));
        let state = washer.poll().await;
        assert!(!state.available());
        assert_eq!(state.preset(), Some(Preset::Cotton));
    }

    #[tokio::test]
    async fn unknown_cycle_has_no_preset() {
        let fake = FakeWasher::new("standby");
        fake.report("cycle", json!("eco40"));
        let washer = washer(&fake, config()).await;
        assert_eq!(washer.state().preset(), None);
        assert_eq!(washer.state().to_attributes()["cycle"], "eco40");
    }
}

// ============================================================================
// Commands
// ============================================================================

mod commands {
    use super::*;

    #[tokio::test]
    async fn turn_off_is_not_undone_by_stale_poll() {
        let fake = FakeWasher::new("run");
        let washer = washer(&fake, config()).await;

        washer.turn_off().await.unwrap();
        assert_eq!(fake.commands(), [r#"set_power ["off"]"#]);

        // The device still reports "run"; the poll right after the command
        // must not overwrite the optimistic state.
        let state = washer.poll().await;
        assert!(!state.is_on());

        fake.settle();
        let state = washer.poll().await;
        assert!(!state.is_on());
        assert_eq!(state.attributes().state(), "off");
    }

    #[tokio::test]
    async fn only_one_poll_is_skipped() {
        let fake = FakeWasher::new("run");
        let washer = washer(&fake, config()).await;
        washer.turn_off().await.unwrap();

        washer.poll().await;
        // Device never applied the command: the second poll shows it.
        assert!(washer.poll().await.is_on());
    }

    #[tokio::test]
    async fn turn_on_with_program() {
        let fake = FakeWasher::new("off");
        let washer = washer(&fake, config()).await;
        assert!(!washer.state().is_on());

        let outcome = washer.turn_on(Some(Preset::Quick)).await.unwrap();
        assert!(outcome.was_sent());
        assert_eq!(
            fake.commands(),
            [r#"set_power ["on"]"#, r#"set_cycle ["quick"]"#]
        );
        let state = washer.state();
        assert!(state.is_on());
        assert_eq!(state.preset(), Some(Preset::Quick));
    }

    #[tokio::test]
    async fn start_after_power_cycle_is_sent() {
        let fake = FakeWasher::new("run");
        let washer = washer(&fake, config()).await;

        washer.turn_off().await.unwrap();
        washer.turn_on(Some(Preset::Start)).await.unwrap();
        assert_eq!(
            fake.commands(),
            [
                r#"set_power ["off"]"#,
                r#"set_power ["on"]"#,
                r#"set_startpause ["start"]"#
            ]
        );
        assert_eq!(washer.state().attributes().state(), "run");
    }

    #[tokio::test]
    async fn pause_is_guarded_by_raw_state() {
        let fake = FakeWasher::new("run");
        let washer = washer(&fake, config()).await;

        assert!(washer.set_preset(Preset::Pause).await.unwrap().was_sent());
        assert_eq!(
            washer.set_preset(Preset::Pause).await.unwrap(),
            CommandOutcome::Skipped
        );
        assert_eq!(fake.commands(), [r#"set_startpause ["pause"]"#]);

        assert!(washer.set_preset(Preset::Start).await.unwrap().was_sent());
        assert_eq!(fake.commands().len(), 2);
    }

    #[tokio::test]
    async fn disabled_guard_always_sends() {
        let fake = FakeWasher::new("pause");
        let config = config().with_start_pause_guard(StartPauseGuard::Disabled);
        let washer = washer(&fake, config).await;

        washer.set_preset(Preset::Pause).await.unwrap();
        washer.set_preset(Preset::Pause).await.unwrap();
        assert_eq!(fake.commands().len(), 2);
    }

    #[tokio::test]
    async fn unknown_preset_name_sends_nothing() {
        let fake = FakeWasher::new("standby");
        let washer = washer(&fake, config()).await;

        let outcome = washer.set_preset_by_name("eco40").await.unwrap();
        assert_eq!(outcome, CommandOutcome::Ignored);
        assert!(fake.commands().is_empty());
        assert!(!washer.is_update_skipped());
    }

    #[tokio::test]
    async fn preset_by_name() {
        let fake = FakeWasher::new("standby");
        let washer = washer(&fake, config()).await;

        washer.set_preset_by_name("sterilize").await.unwrap();
        assert_eq!(fake.commands(), [r#"set_cycle ["sterilize"]"#]);
        assert_eq!(washer.state().preset(), Some(Preset::Sterilize));
    }

    #[tokio::test]
    async fn percentage_and_preset_are_exclusive() {
        let fake = FakeWasher::new("standby");
        let washer = washer(&fake, config()).await;

        washer.set_percentage(40).await.unwrap();
        let state = washer.state();
        assert_eq!(state.preset(), None);
        assert_eq!(state.percentage().map(|p| p.value()), Some(40));
        assert!(fake.commands().is_empty());

        washer.set_preset(Preset::Towel).await.unwrap();
        assert_eq!(washer.state().percentage(), None);
    }

    #[tokio::test]
    async fn failed_command_propagates() {
        let fake = FakeWasher::new("run");
        let washer = washer(&fake, config()).await;
        let before = washer.state();

        fake.set_offline(true);
        let err = washer.set_preset(Preset::Wool).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::ConnectionFailed(_))
        ));
        assert_eq!(washer.state(), before);
        assert!(!washer.is_update_skipped());
    }

    #[tokio::test]
    async fn build_fails_when_device_unreachable() {
        let fake = FakeWasher::new("run");
        fake.set_offline(true);
        let result = Washer::builder(config(), fake).build().await;
        assert!(result.is_err());
    }
}

// ============================================================================
// Background polling
// ============================================================================

mod poller {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn follows_device_changes() {
        let fake = FakeWasher::new("standby");
        let washer = Arc::new(
            Washer::builder(config().with_poll_interval(Duration::from_secs(10)), fake.clone())
                .build()
                .await
                .unwrap(),
        );
        let handle = Poller::spawn(Arc::clone(&washer));
        let mut updates = handle.subscribe();

        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().attributes().state(), "standby");

        fake.report("state", json!("run"));
        fake.report("time_remain", json!(80));
        updates.changed().await.unwrap();
        let state = updates.borrow_and_update().clone();
        assert_eq!(state.attributes().state(), "run");
        assert_eq!(state.attributes().time_remain(), Some(80));

        handle.stop().await;
    }
}
