//! Dispatch of the computed temperature to the display.
//!
//! redshift only accepts values between 1000K and 25000K, so the setter
//! clamps before invoking it and warns the user when a bound kicks in.
//! The invocation itself is synchronous fire-and-forget: redshift's own
//! exit status is not interpreted.

use std::process::{Command, Stdio};

use crate::error::CoreError;
use crate::report::Reporter;
use crate::rule::Kelvin;

/// Lowest temperature redshift accepts.
pub const MIN_TEMPERATURE: i32 = 1000;
/// Highest temperature redshift accepts.
pub const MAX_TEMPERATURE: i32 = 25000;

/// Applies a computed temperature to the display.
pub trait Setter {
    fn apply(&self, temperature: Kelvin, reporter: &dyn Reporter) -> Result<(), CoreError>;
}

/// Clamp into the range redshift accepts, warning when a bound applies.
pub fn clamp(temperature: Kelvin, reporter: &dyn Reporter) -> Kelvin {
    if temperature.value() < MIN_TEMPERATURE {
        reporter.warn(&format!(
            "the temperature must not be lower than {}",
            Kelvin(MIN_TEMPERATURE)
        ));
        return Kelvin(MIN_TEMPERATURE);
    }
    if temperature.value() > MAX_TEMPERATURE {
        reporter.warn(&format!(
            "the temperature must not be higher than {}",
            Kelvin(MAX_TEMPERATURE)
        ));
        return Kelvin(MAX_TEMPERATURE);
    }
    temperature
}

/// Runs `redshift -P -O <temperature>`.
pub struct RedshiftSetter {
    /// Route the child process output to the void (silent mode).
    pub quiet: bool,
}

impl Setter for RedshiftSetter {
    fn apply(&self, temperature: Kelvin, reporter: &dyn Reporter) -> Result<(), CoreError> {
        let temperature = clamp(temperature, reporter);
        reporter.info(&format!("Temperature to set: {temperature}"));
        reporter.verbose(&format!(
            "Command to execute: redshift -P -O {temperature}"
        ));

        let mut command = Command::new("redshift");
        command.arg("-P").arg("-O").arg(temperature.to_string());
        if self.quiet {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }
        // Fire-and-forget: wait for the child but ignore its exit status.
        command.status().map_err(|err| CoreError::Setter {
            message: format!("failed to run redshift: {err}"),
        })?;
        Ok(())
    }
}

/// Clamps and reports without touching the display (dry runs, tests).
pub struct NoopSetter;

impl Setter for NoopSetter {
    fn apply(&self, temperature: Kelvin, reporter: &dyn Reporter) -> Result<(), CoreError> {
        let temperature = clamp(temperature, reporter);
        reporter.info(&format!("Temperature to set: {temperature}"));
        Ok(())
    }
}
