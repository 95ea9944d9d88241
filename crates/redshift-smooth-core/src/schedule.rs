//! Active-rule selection over a sorted schedule.

use crate::error::ConfigError;
use crate::rule::{Rule, Selection};

/// A schedule owning its rules sorted ascending by start time.
///
/// The schedule need not cover 24 hours: a gap between rules holds the
/// most recently reached target temperature until the next range starts,
/// and a query before the first rule's start wraps around to the last
/// rule of the day.
#[derive(Debug, Clone)]
pub struct Schedule {
    rules: Vec<Rule>,
}

impl Schedule {
    /// Build a schedule from parsed rules, sorting by start time.
    ///
    /// The sort is stable, so rules sharing a start keep their file order.
    /// An empty rule set is rejected.
    pub fn new(mut rules: Vec<Rule>) -> Result<Self, ConfigError> {
        if rules.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }
        rules.sort_by_key(|rule| rule.start);
        Ok(Self { rules })
    }

    /// The rules in sorted order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Find the rule applicable at `minute` (minutes since midnight) and
    /// annotate it with the preceding rule's target temperature.
    ///
    /// Scans the sorted rules short of the last one: the first rule whose
    /// start lies beyond the query yields its predecessor (the query sits
    /// in the gap before it); a rule whose range contains the query yields
    /// itself. Falling through yields the last rule. Predecessors wrap
    /// around the list via explicit modulo.
    pub fn select(&self, minute: u32) -> Selection {
        let n = self.rules.len();
        let mut matched = n - 1;
        for i in 0..n.saturating_sub(1) {
            if self.rules[i].start > minute {
                matched = (i + n - 1) % n;
                break;
            }
            if self.rules[i].end >= minute {
                matched = i;
                break;
            }
        }
        let previous = self.rules[(matched + n - 1) % n].temperature;
        Selection {
            rule: self.rules[matched].clone(),
            previous,
        }
    }
}
