// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan-style percentage value.

use std::fmt;

use crate::error::ValueError;

/// Percentage exposed through the fan speed capability (0-100).
///
/// The washer has no continuous speed; the percentage is an alternative
/// representation of "what the machine is doing" and is mutually exclusive
/// with the preset.
///
/// # Examples
///
/// ```
/// use mijia_washer::types::Percentage;
///
/// let half = Percentage::new(50).unwrap();
/// assert_eq!(half.value(), 50);
/// assert!(Percentage::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Percentage(u8);

impl Percentage {
    /// Maximum percentage value.
    pub const MAX: u8 = 100;

    /// Zero percent, used when the washer is turned off.
    pub const ZERO: Self = Self(0);

    /// Creates a new percentage.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is greater than 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: u16::from(Self::MAX),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(Percentage::new(0).is_ok());
        assert!(Percentage::new(100).is_ok());
        assert_eq!(
            Percentage::new(150),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: 150
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Percentage::new(42).unwrap().to_string(), "42%");
    }
}
