//! Time-of-day conversion.
//!
//! All schedule math happens on an integer minute-of-day scale. No
//! timezone handling beyond reading the local wall clock.

use chrono::{Local, Timelike};

use crate::error::ConfigError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Convert an `"H:MM"` or `"HH:MM"` string (hours 0-23, minutes 0-59)
/// into total minutes since midnight.
pub fn parse_time_of_day(s: &str) -> Result<u32, ConfigError> {
    let bad = || ConfigError::BadTime {
        value: s.to_string(),
    };
    let (hours, minutes) = s.split_once(':').ok_or_else(bad)?;
    let hours: u32 = hours.parse().map_err(|_| bad())?;
    let minutes: u32 = minutes.parse().map_err(|_| bad())?;
    if hours > 23 || minutes > 59 {
        return Err(bad());
    }
    Ok(hours * 60 + minutes)
}

/// Minutes since local midnight, right now.
pub fn current_minute() -> u32 {
    let now = Local::now();
    now.hour() * 60 + now.minute()
}
