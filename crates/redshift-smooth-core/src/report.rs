//! User-facing output.
//!
//! Verbosity is a value handed down the pipeline, never ambient state:
//! the CLI builds one [`Reporter`] and passes it to whatever needs to
//! talk to the user. Silent mode is the no-op implementation rather than
//! a swapped-out output stream.

/// Sink for user-facing messages.
pub trait Reporter {
    /// Normal output.
    fn info(&self, message: &str);
    /// Extra detail, shown only in verbose mode.
    fn verbose(&self, message: &str);
    /// Warnings, e.g. a value clamped into the allowed range.
    fn warn(&self, message: &str);
}

/// Prints to stdout, warnings to stderr.
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{message}");
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("warning: {message}");
    }
}

/// Discards everything.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn info(&self, _message: &str) {}
    fn verbose(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}
