//! Schedule file parsing.
//!
//! One rule per line: `HH:MM <marker> HH:MM | <digits>K`, whitespace
//! flexible. `#` starts a comment (only the first `#` counts); blank and
//! comment-only lines are skipped. Fields are extracted by pattern across
//! the whole line, so their textual order is not significant.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ConfigError;
use crate::rule::{Rule, Transition};
use crate::time::parse_time_of_day;

fn time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{1,2}:\d{2}").unwrap())
}

fn marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"--|->").unwrap())
}

fn temperature_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+[kK]").unwrap())
}

/// Cut the line at its first `#` and collapse surrounding whitespace.
fn clean_line(line: &str) -> String {
    let code = line.split('#').next().unwrap_or("");
    code.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract one rule from an already-cleaned line.
fn parse_line(line: &str, line_no: usize) -> Result<Rule, ConfigError> {
    let format_err = |message: &str| ConfigError::Format {
        line: line_no,
        message: message.to_string(),
    };

    let mut times = time_re().find_iter(line);
    let start = times
        .next()
        .ok_or_else(|| format_err("missing start time"))?;
    let end = times.next().ok_or_else(|| format_err("missing end time"))?;

    let marker = marker_re()
        .find(line)
        .ok_or_else(|| format_err("missing transition marker (`--` or `->`)"))?;
    let transition = Transition::from_marker(marker.as_str())
        .ok_or_else(|| format_err("missing transition marker (`--` or `->`)"))?;

    let temperature = temperature_re()
        .find(line)
        .ok_or_else(|| format_err("missing temperature (digits followed by `K`)"))?;

    Ok(Rule {
        start: parse_time_of_day(start.as_str())?,
        end: parse_time_of_day(end.as_str())?,
        transition,
        temperature: temperature.as_str().parse()?,
    })
}

/// Parse schedule text into rules, in file order (no sorting here).
///
/// A line that survives comment stripping but fails to yield all required
/// fields aborts the run with [`ConfigError::Format`] carrying the 1-based
/// line number; the config is hand-edited, so typos should be loud.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>, ConfigError> {
    let mut rules = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = clean_line(raw);
        if line.is_empty() {
            continue;
        }
        rules.push(parse_line(&line, idx + 1)?);
    }
    Ok(rules)
}
