//! Schedule rule model.
//!
//! A rule maps a time-of-day range to a target color temperature and a
//! transition style. Times are minutes since midnight; an `end` smaller
//! than `start` means the range crosses midnight into the next day.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ConfigError;

/// How the temperature moves across a rule's time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// `--`: the target applies as soon as the range starts.
    Instant,
    /// `->`: linear interpolation across the range.
    Gradual,
}

impl Transition {
    /// Parse a config marker token (`--` or `->`).
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "--" => Some(Self::Instant),
            "->" => Some(Self::Gradual),
            _ => None,
        }
    }
}

/// A color temperature in Kelvin, rendered as `"6500K"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Kelvin(pub i32);

impl Kelvin {
    /// The raw Kelvin value.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

impl FromStr for Kelvin {
    type Err = ConfigError;

    /// Parses `"6500K"`; the suffix is accepted case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::BadTemperature {
            value: s.to_string(),
        };
        let digits = s.strip_suffix(['K', 'k']).ok_or_else(bad)?;
        let value = digits.parse::<i32>().map_err(|_| bad())?;
        Ok(Kelvin(value))
    }
}

impl Serialize for Kelvin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Range start, minutes since midnight (0-1439).
    pub start: u32,
    /// Range end, minutes since midnight (0-1439). May be smaller than
    /// `start` for a range reaching into the next day.
    pub end: u32,
    pub transition: Transition,
    /// Target temperature once the range completes.
    pub temperature: Kelvin,
}

/// A rule annotated at selection time with the target temperature of the
/// rule immediately preceding it in sorted order.
///
/// The previous temperature is the interpolation baseline and the value
/// held in the gap before the range begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub rule: Rule,
    pub previous: Kelvin,
}
