// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for the composite `process` property.
//!
//! The device reports the stages of the selected program and the stage it
//! is currently in as one string:
//!
//! ```text
//! options:weigh,wash,rinse,spin;processing:rinse
//! ```
//!
//! Stage codes are translated into display labels. Codes missing from the
//! table are kept verbatim so new firmware stages still show up.

use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

const OPTIONS_KEY: &str = "options";
const PROCESSING_KEY: &str = "processing";

/// Returns the display label for a stage code, or `None` if the code is
/// not in the table.
#[must_use]
pub fn stage_label(code: &str) -> Option<&'static str> {
    let label = match code {
        "weigh" => "称重",
        "soak" => "浸泡",
        "wash" => "主洗",
        "rinse" => "漂洗",
        "spin" => "脱水",
        "dry" => "烘干",
        "cool" => "冷却",
        "finish" => "完成",
        _ => return None,
    };
    Some(label)
}

fn translate(code: &str) -> String {
    stage_label(code).map_or_else(|| code.to_string(), ToString::to_string)
}

/// Decoded `process` property.
///
/// # Examples
///
/// ```
/// use mijia_washer::telemetry::ProcessRecord;
///
/// let record: ProcessRecord = "options:wash,rinse;processing:spin".parse().unwrap();
/// assert_eq!(record.options(), ["主洗", "漂洗"]);
/// assert_eq!(record.current(), Some("脱水"));
///
/// // Unknown stage codes pass through unchanged
/// let record: ProcessRecord = "options:foo;processing:bar".parse().unwrap();
/// assert_eq!(record.options(), ["foo"]);
/// assert_eq!(record.current(), Some("bar"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    options: Vec<String>,
    current: Option<String>,
}

impl ProcessRecord {
    /// Parses a raw `process` value.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MalformedProcessField` unless the value has
    /// exactly two `;`-separated segments keyed `options` and `processing`.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedProcessField(raw.to_string());

        let mut segments = raw.split(';');
        let (Some(options), Some(processing), None) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(malformed());
        };

        let options = segment_value(options, OPTIONS_KEY).ok_or_else(malformed)?;
        let processing = segment_value(processing, PROCESSING_KEY).ok_or_else(malformed)?;

        let options = options
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(translate)
            .collect();
        let current = (!processing.is_empty()).then(|| translate(processing));

        Ok(Self { options, current })
    }

    /// Labels of the stages making up the selected program, in order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Label of the stage currently running, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl FromStr for ProcessRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn segment_value<'a>(segment: &'a str, key: &str) -> Option<&'a str> {
    let (found, value) = segment.split_once(':')?;
    (found.trim() == key).then(|| value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_are_translated() {
        let record = ProcessRecord::parse("options:wash,rinse;processing:spin").unwrap();
        assert_eq!(record.options(), ["主洗", "漂洗"]);
        assert_eq!(record.current(), Some("脱水"));
    }

    #[test]
    fn unknown_codes_pass_through() {
        let record = ProcessRecord::parse("options:foo;processing:bar").unwrap();
        assert_eq!(record.options(), ["foo"]);
        assert_eq!(record.current(), Some("bar"));
    }

    #[test]
    fn mixed_known_and_unknown_codes() {
        let record = ProcessRecord::parse("options:weigh,steam,dry;processing:steam").unwrap();
        assert_eq!(record.options(), ["称重", "steam", "烘干"]);
        assert_eq!(record.current(), Some("steam"));
    }

    #[test]
    fn empty_segments() {
        let record = ProcessRecord::parse("options:;processing:").unwrap();
        assert!(record.options().is_empty());
        assert_eq!(record.current(), None);
    }

    #[test]
    fn whitespace_is_tolerated() {
        let record = ProcessRecord::parse("options: wash , rinse ;processing: rinse").unwrap();
        assert_eq!(record.options(), ["主洗", "漂洗"]);
        assert_eq!(record.current(), Some("漂洗"));
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        for raw in [
            "",
            "options:wash",
            "processing:spin",
            "options:wash;processing:spin;extra:1",
            "processing:spin;options:wash",
            "options=wash;processing=spin",
            "wash,rinse;spin",
        ] {
            assert!(
                matches!(
                    ProcessRecord::parse(raw),
                    Err(ParseError::MalformedProcessField(ref s)) if s == raw
                ),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn stage_table() {
        assert_eq!(stage_label("wash"), Some("主洗"));
        assert_eq!(stage_label("finish"), Some("完成"));
        assert_eq!(stage_label("WASH"), None);
    }
}
