//! Temperature interpolation within a selected rule.

use crate::rule::{Kelvin, Selection, Transition};
use crate::time::MINUTES_PER_DAY;

/// Compute the temperature for `minute` under the selected rule.
///
/// Before the range begins the previous rule's target is held; past the
/// range end the rule's own target is held. Inside the range, an instant
/// rule jumps straight to its target while a gradual rule interpolates
/// linearly between the previous and the target temperature, truncating
/// the shifted amount toward zero.
pub fn temperature_at(selection: &Selection, minute: u32) -> Kelvin {
    let rule = &selection.rule;
    let start = rule.start;
    let mut end = rule.end;
    let mut minute = minute;

    // A range whose end precedes its start reaches into the next day;
    // lift end (and an early-morning query) onto a continuous scale.
    if end < start {
        end += MINUTES_PER_DAY;
        if minute < start {
            minute += MINUTES_PER_DAY;
        }
    }

    if minute < start {
        return selection.previous;
    }
    if minute > end || end == start || rule.transition == Transition::Instant {
        return rule.temperature;
    }

    let proportion = f64::from(minute - start) / f64::from(end - start);
    let delta = rule.temperature.value() - selection.previous.value();
    let shift = (f64::from(delta) * proportion) as i32;
    Kelvin(selection.previous.value() + shift)
}
