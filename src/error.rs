// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the washer library.
//!
//! Errors are split by where they originate: value validation, communication
//! with the device, decoding of device-reported values, and device setup.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the device.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while decoding a device response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred while setting up the device.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// The preset name is not one of the supported wash programs.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Errors raised while communicating with the device.
///
/// During polling these are recovered locally (the entity becomes
/// unavailable); during command dispatch they are returned to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The device could not be reached.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The device answered with an error for the command.
    #[error("command {command} rejected: {message}")]
    CommandRejected {
        /// The command that was rejected.
        command: String,
        /// Error message reported by the device.
        message: String,
    },
}

/// Errors related to decoding values reported by the device.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The composite `process` field does not follow
    /// `options:<csv>;processing:<code>`.
    #[error("malformed process field: {0:?}")]
    MalformedProcessField(String),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to device setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// Device configuration is invalid.
    #[error("invalid device configuration: {0}")]
    InvalidConfiguration(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
