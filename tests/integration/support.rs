use softassert::{ReportConfig, ReportFormat, TestContext};

/// Context that never writes to stderr, so assertions inside these tests can
/// fail on purpose without noise.
pub fn quiet(name: &str) -> TestContext {
    TestContext::with_config(name, ReportConfig::new(ReportFormat::Silent))
}
