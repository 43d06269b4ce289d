use std::cell::{Cell, RefCell};

use crate::config::{ReportConfig, ReportFormat};
use crate::domain::error::TestFailure;
use crate::domain::report::{FailureRecord, TestReport};
use crate::domain::reporter::Reporter;
use crate::io::emit::{emit_report, render_text};

/// Failure collector for one named test.
///
/// Assertions record into the context and the test keeps running. The verdict
/// is taken once, by [`TestContext::verify`] or [`TestContext::assert_passed`].
/// A context dropped without a verdict panics if anything failed, unless the
/// thread is already unwinding. [`TestContext::finish`] hands the report back
/// without a verdict.
///
/// A context is not `Sync`; sub-tests on other threads get their own context.
#[must_use = "failures are only reported through `verify`, `assert_passed`, `finish` or drop"]
#[derive(Debug)]
pub struct TestContext {
    name: String,
    config: ReportConfig,
    failures: RefCell<Vec<FailureRecord>>,
    subtests: RefCell<Vec<TestReport>>,
    concluded: Cell<bool>,
}

impl TestContext {
    /// Creates a context configured from the environment.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, ReportConfig::from_env())
    }

    pub fn with_config(name: impl Into<String>, config: ReportConfig) -> Self {
        Self {
            name: name.into(),
            config,
            failures: RefCell::new(Vec::new()),
            subtests: RefCell::new(Vec::new()),
            concluded: Cell::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> ReportConfig {
        self.config
    }

    /// True once this test or any finished sub-test recorded a failure.
    pub fn failed(&self) -> bool {
        !self.failures.borrow().is_empty()
            || self.subtests.borrow().iter().any(|sub| !sub.passed)
    }

    /// Messages recorded directly against this test, in order.
    pub fn failures(&self) -> Vec<String> {
        self.failures
            .borrow()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    /// Runs `body` as a sub-test named `<parent>/<name>` with its own context.
    ///
    /// Returns whether the sub-test passed. A failing sub-test marks this test
    /// failed as well. The sub-test report is kept even if `body` panics.
    pub fn run<F>(&self, name: &str, body: F) -> bool
    where
        F: FnOnce(&TestContext),
    {
        let guard = SubtestGuard {
            parent: self,
            child: TestContext::with_config(format!("{}/{name}", self.name), self.config),
        };
        body(&guard.child);
        !guard.child.failed()
    }

    pub fn report(&self) -> TestReport {
        let failures = self.failures.borrow().clone();
        let subtests = self.subtests.borrow().clone();
        TestReport {
            name: self.name.clone(),
            passed: !self.failed(),
            failure_count: failures.len(),
            failures,
            subtests,
        }
    }

    /// Returns the report without taking a verdict; the caller owns any
    /// recorded failures from here on.
    pub fn finish(self) -> TestReport {
        self.concluded.set(true);
        self.report()
    }

    /// Returns the verdict. Only the JSON format writes to stderr here; the
    /// text form of a failure is rendered by the returned error.
    pub fn verify(self) -> Result<TestReport, TestFailure> {
        let verdict = self.conclude();
        self.emit(verdict.as_ref().unwrap_or_else(|failure| &failure.report));
        verdict
    }

    /// Panics with every recorded failure if the test did not pass.
    pub fn assert_passed(self) {
        self.conclude_or_panic();
    }

    fn conclude(&self) -> Result<TestReport, TestFailure> {
        self.concluded.set(true);
        into_verdict(self.report())
    }

    fn conclude_or_panic(&self) {
        let verdict = self.conclude();
        self.emit(verdict.as_ref().unwrap_or_else(|failure| &failure.report));
        if let Err(failure) = verdict {
            panic!("{failure}\n{}", render_text(&failure.report));
        }
    }

    fn emit(&self, report: &TestReport) {
        if let Some(format) = verdict_emission(self.config.format) {
            emit_report(report, format);
        }
    }
}

/// Format written to stderr when a verdict is taken. Text failures already
/// travel in the `TestFailure` or panic message.
fn verdict_emission(format: ReportFormat) -> Option<ReportFormat> {
    match format {
        ReportFormat::Json => Some(ReportFormat::Json),
        ReportFormat::Text | ReportFormat::Silent => None,
    }
}

impl Reporter for TestContext {
    fn record_failure(&self, message: String) {
        self.failures.borrow_mut().push(FailureRecord {
            test: self.name.clone(),
            message,
        });
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if self.concluded.get() || std::thread::panicking() || !self.failed() {
            return;
        }
        self.conclude_or_panic();
    }
}

/// Files the child report with its parent, including while unwinding.
struct SubtestGuard<'a> {
    parent: &'a TestContext,
    child: TestContext,
}

impl Drop for SubtestGuard<'_> {
    fn drop(&mut self) {
        self.child.concluded.set(true);
        let report = self.child.report();
        self.parent.subtests.borrow_mut().push(report);
    }
}

fn into_verdict(report: TestReport) -> Result<TestReport, TestFailure> {
    if report.passed {
        return Ok(report);
    }
    Err(TestFailure {
        name: report.name.clone(),
        failure_count: report.total_failures(),
        report,
    })
}
