use std::fmt;

use thiserror::Error;

use crate::domain::report::TestReport;
use crate::io::emit::render_text;

/// Errors produced while reading report configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Report format name is not one of `text`, `json` or `silent`.
    #[error("unknown report format `{value}` (expected text, json or silent)")]
    UnknownReportFormat { value: String },
}

/// Returned by [`crate::TestContext::verify`] when any assertion failed.
#[derive(Error)]
#[error("test `{name}` failed with {failure_count} failure(s)")]
pub struct TestFailure {
    pub name: String,
    pub failure_count: usize,
    pub report: TestReport,
}

// The test harness prints `Err` values with `{:?}`; show the failures there.
impl fmt::Debug for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}\n{}", render_text(&self.report))
    }
}
