//! # redshift-smooth Core Library
//!
//! Business logic for the `redshift-smooth` CLI: reads a small
//! user-authored schedule of time ranges and target color temperatures,
//! selects the rule active at a given time of day (including ranges that
//! wrap past midnight), and linearly interpolates the temperature between
//! the previous rule's target and the active rule's target. The computed
//! value is handed to `redshift` once per invocation.
//!
//! ## Key Components
//!
//! - [`Schedule`]: sorted rule set and active-rule lookup
//! - [`temperature_at`]: interpolation within the selected rule
//! - [`Reporter`]: user-facing output, threaded through as a parameter
//! - [`Setter`]: dispatch of the clamped value to the display

pub mod config;
pub mod error;
pub mod interpolate;
pub mod parse;
pub mod report;
pub mod rule;
pub mod schedule;
pub mod setter;
pub mod time;

pub use error::{ConfigError, CoreError, Result};
pub use interpolate::temperature_at;
pub use parse::parse_rules;
pub use report::{ConsoleReporter, Reporter, SilentReporter};
pub use rule::{Kelvin, Rule, Selection, Transition};
pub use schedule::Schedule;
pub use setter::{NoopSetter, RedshiftSetter, Setter};
