//! Schedule file location and loading.
//!
//! The rules file lives at `~/.config/redshift-scheduler/rules.conf`, the
//! same place the original redshift-scheduler reads from, so an existing
//! config keeps working.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::parse::parse_rules;
use crate::rule::Rule;

/// Returns `~/.config/redshift-scheduler/rules.conf`.
pub fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("redshift-scheduler")
        .join("rules.conf")
}

/// Read a schedule file and parse its rules, in file order.
///
/// A missing file is [`ConfigError::NotFound`]; the CLI maps it to a
/// distinct exit status.
pub fn load_rules(path: &Path) -> Result<Vec<Rule>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    parse_rules(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_rules_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# daytime").unwrap();
        writeln!(file, "09:00 -> 09:30 | 4500K").unwrap();
        writeln!(file, "09:30 -- 17:00 | 6500K").unwrap();
        file.flush().unwrap();

        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].start, 540);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-rules.conf");
        assert!(matches!(
            load_rules(&path),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_comments_only_file_yields_no_rules() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing but comments").unwrap();
        writeln!(file, "   ").unwrap();
        file.flush().unwrap();

        let rules = load_rules(file.path()).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_default_path_points_at_the_scheduler_config() {
        let path = default_path();
        assert!(path.ends_with(".config/redshift-scheduler/rules.conf"));
    }
}
