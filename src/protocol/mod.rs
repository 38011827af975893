// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device client boundary.
//!
//! The washer speaks the miIO property protocol: values are read with
//! `get_prop` and commands are sent as named RPC calls with a JSON argument
//! list. This crate does not implement the encrypted LAN transport; callers
//! plug their transport in by implementing [`Protocol`].
//!
//! # Implementing a client
//!
//! ```
//! use mijia_washer::error::ProtocolError;
//! use mijia_washer::protocol::{CommandResponse, Protocol};
//! use serde_json::{Value, json};
//!
//! struct AlwaysOff;
//!
//! impl Protocol for AlwaysOff {
//!     async fn get_properties(&self, names: &[&str]) -> Result<Vec<Value>, ProtocolError> {
//!         Ok(names.iter().map(|_| json!("off")).collect())
//!     }
//!
//!     async fn raw_command(
//!         &self,
//!         _name: &str,
//!         _args: &[Value],
//!     ) -> Result<CommandResponse, ProtocolError> {
//!         Ok(CommandResponse::new(json!(["ok"])))
//!     }
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::{ParseError, ProtocolError};

#[cfg(test)]
pub(crate) mod mock;

/// Response returned by the device for a raw command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResponse {
    result: Value,
}

impl CommandResponse {
    /// Creates a new command response wrapping the `result` member of the
    /// device reply.
    #[must_use]
    pub fn new(result: Value) -> Self {
        Self { result }
    }

    /// Returns the raw result value.
    #[must_use]
    pub fn result(&self) -> &Value {
        &self.result
    }

    /// Returns `true` if the device acknowledged with `["ok"]` or `"ok"`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        match &self.result {
            Value::String(s) => s == "ok",
            Value::Array(items) => matches!(items.as_slice(), [Value::String(s)] if s == "ok"),
            _ => false,
        }
    }

    /// Decodes the result as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the result cannot be decoded into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_value(self.result.clone()).map_err(Into::into)
    }
}

/// A client able to read properties from and send commands to one washer.
///
/// Both operations fail with [`ProtocolError`] on any network or protocol
/// failure. Implementations must not retry internally unless that is the
/// transport's documented behavior; the washer never retries.
pub trait Protocol {
    /// Reads the named properties.
    ///
    /// The returned values are aligned positionally with `names`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails.
    fn get_properties(
        &self,
        names: &[&str],
    ) -> impl Future<Output = Result<Vec<Value>, ProtocolError>> + Send;

    /// Sends a raw command with a JSON argument list.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command fails to send or is rejected.
    fn raw_command(
        &self,
        name: &str,
        args: &[Value],
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ok_detection() {
        assert!(CommandResponse::new(json!(["ok"])).is_ok());
        assert!(CommandResponse::new(json!("ok")).is_ok());
        assert!(!CommandResponse::new(json!(["error"])).is_ok());
        assert!(!CommandResponse::new(json!({"code": -1})).is_ok());
    }

    #[test]
    fn parse_result() {
        let response = CommandResponse::new(json!({"model": "minij.washer.v5"}));
        let value: serde_json::Map<String, Value> = response.parse().unwrap();
        assert_eq!(value["model"], "minij.washer.v5");
    }
}
