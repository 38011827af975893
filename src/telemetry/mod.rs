// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of polled device properties.
//!
//! A poll reads a fixed set of properties (see [`WASHER_PROPERTIES`]) into a
//! [`PropertySet`], which is then decoded into typed
//! [`WasherAttributes`](crate::state::WasherAttributes). Decoding is all or
//! nothing: any error discards the whole set.
//!
//! # Examples
//!
//! ```
//! use mijia_washer::telemetry::{PropertySet, WASHER_PROPERTIES};
//! use serde_json::json;
//!
//! let values = vec![
//!     json!("run"),
//!     json!("options:wash,rinse,spin;processing:rinse"),
//!     json!("quick"),
//!     json!(18),
//!     json!("off"),
//!     json!(2),
//! ];
//! let set = PropertySet::from_values(&WASHER_PROPERTIES, values).unwrap();
//! let attributes = set.decode().unwrap();
//!
//! assert_eq!(attributes.state(), "run");
//! assert_eq!(attributes.cycle(), Some("quick"));
//! assert_eq!(attributes.process().unwrap().current(), Some("漂洗"));
//! ```

mod process;

pub use process::{ProcessRecord, stage_label};

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ParseError;
use crate::state::WasherAttributes;

/// Properties read on every poll.
pub const WASHER_PROPERTIES: [&str; 6] = [
    "state",
    "process",
    "cycle",
    "time_remain",
    "child_lock",
    "volume",
];

/// Raw property values from one poll, keyed by property name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet {
    values: BTreeMap<String, Value>,
}

impl PropertySet {
    /// Pairs property names with the values returned for them.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the device returned a
    /// different number of values than was requested.
    pub fn from_values(names: &[&str], values: Vec<Value>) -> Result<Self, ParseError> {
        if names.len() != values.len() {
            return Err(ParseError::UnexpectedFormat(format!(
                "requested {} properties, got {} values",
                names.len(),
                values.len()
            )));
        }
        let values = names
            .iter()
            .map(|name| (*name).to_string())
            .zip(values)
            .collect();
        Ok(Self { values })
    }

    /// Merges values from another set, e.g. a later chunk of the same poll.
    pub fn extend(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    /// Returns the raw value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns the number of properties in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the set holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Decodes the set into typed attributes.
    ///
    /// `state` is required. The other known properties are optional; a
    /// `null` value counts as absent. Numeric properties that cannot be read
    /// as numbers are kept in the extra map rather than rejected. Properties
    /// outside [`WASHER_PROPERTIES`] land in the extra map unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `state` is missing or not a string, if
    /// `cycle`/`process` are not strings, or if `process` is malformed.
    pub fn decode(&self) -> Result<WasherAttributes, ParseError> {
        let mut attributes = WasherAttributes {
            state: required_str(self.get("state"), "state")?.to_string(),
            ..WasherAttributes::default()
        };

        for (name, value) in &self.values {
            if value.is_null() {
                continue;
            }
            match name.as_str() {
                "state" => {}
                "process" => {
                    let raw = required_str(Some(value), name)?;
                    attributes.process = Some(ProcessRecord::parse(raw)?);
                }
                "cycle" => {
                    attributes.cycle = Some(required_str(Some(value), name)?.to_string());
                }
                "time_remain" => match as_u32(value) {
                    Some(minutes) => attributes.time_remain = Some(minutes),
                    None => keep_raw(&mut attributes, name, value),
                },
                "volume" => match as_u32(value) {
                    Some(volume) => attributes.volume = Some(volume),
                    None => keep_raw(&mut attributes, name, value),
                },
                "child_lock" => match as_switch(value) {
                    Some(locked) => attributes.child_lock = Some(locked),
                    None => keep_raw(&mut attributes, name, value),
                },
                _ => keep_raw(&mut attributes, name, value),
            }
        }

        Ok(attributes)
    }
}

fn keep_raw(attributes: &mut WasherAttributes, name: &str, value: &Value) {
    attributes.extra.insert(name.to_string(), value.clone());
}

fn required_str<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a str, ParseError> {
    match value {
        None | Some(Value::Null) => Err(ParseError::MissingField(field.to_string())),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("expected a string, got {other}"),
        }),
    }
}

fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_switch(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "on" => Some(true),
            "off" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_u64().map(|n| n != 0),
        _ => None,
    }
}
