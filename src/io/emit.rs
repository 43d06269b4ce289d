use std::fmt::Write as _;

use crate::config::ReportFormat;
use crate::domain::report::TestReport;

const JSON_FALLBACK: &str =
    "{\"error\":\"internal_error\",\"message\":\"failed to serialize test report\"}";

/// Writes a finished report to stderr in the requested format.
///
/// Passing reports are only emitted in JSON form.
pub fn emit_report(report: &TestReport, format: ReportFormat) {
    match format {
        ReportFormat::Silent => {}
        ReportFormat::Text => {
            if !report.passed {
                eprint!("{}", render_text(report));
            }
        }
        ReportFormat::Json => eprintln!("{}", render_json(report)),
    }
}

/// Renders a report as `--- FAIL:` blocks, one per failing test or sub-test.
pub fn render_text(report: &TestReport) -> String {
    let mut out = String::new();
    write_text(&mut out, report, 0);
    out
}

pub fn render_json(report: &TestReport) -> String {
    report
        .to_json()
        .unwrap_or_else(|_| JSON_FALLBACK.to_string())
}

fn write_text(out: &mut String, report: &TestReport, depth: usize) {
    if report.passed {
        return;
    }
    let indent = "    ".repeat(depth);
    let _ = writeln!(out, "{indent}--- FAIL: {}", report.name);
    for failure in &report.failures {
        for line in failure.message.lines() {
            let _ = writeln!(out, "{indent}    {line}");
        }
    }
    for subtest in &report.subtests {
        write_text(out, subtest, depth + 1);
    }
}
