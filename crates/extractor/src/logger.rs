use std::fmt::Debug;

use cssparser::SourceLocation;

/// Sink for log messages
///
/// The parser reports every malformed rule it skips through this trait.
/// Passing a logger via [`Options::logger`](crate::Options::logger) keeps
/// warning handling scoped to the call instead of relying on process-wide
/// state.
pub trait Logger: Debug {
    /// Logs a recoverable parser warning
    fn warn(&self, location: SourceLocation, message: &str);
}

/// Logs events to standard error
#[derive(Debug)]
pub struct StdLogger;

impl Logger for StdLogger {
    #[inline]
    fn warn(&self, location: SourceLocation, message: &str) {
        eprintln!(
            "Warning: {}\n    at {}:{}",
            message,
            location.line + 1,
            location.column
        );
    }
}

/// Discards all log events
#[derive(Debug)]
pub struct NullLogger;

impl Logger for NullLogger {
    #[inline]
    fn warn(&self, _location: SourceLocation, _message: &str) {}
}
