use crate::report::report_model::{AggregateSummary, BrowserReport};

// ============================================================================
// Console summary — printed after the combined report is written
// ============================================================================

/// Format the combined result for terminal output.
///
/// Produces output like:
/// ```text
/// === Combined Report: 2 browsers ===
///
/// ✓ PASS  chromium — 8 passed, 0 failed, 1 skipped (9 total) in 12.34s
/// ✗ FAIL  firefox — 7 passed, 2 failed, 0 skipped (9 total) in 15.01s
///
/// === Overall: 15 passed, 2 failed, 1 skipped (18 total) — 83.3% success ===
/// ```
pub fn format_console_summary(
    browsers: &[BrowserReport],
    aggregate: &AggregateSummary,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Combined Report: {} browser(s) ===\n\n",
        browsers.len()
    ));

    for report in browsers {
        let summary = &report.summary;
        let marker = if summary.has_failures() {
            "\u{2717} FAIL"
        } else {
            "\u{2713} PASS"
        };
        out.push_str(&format!(
            "{}  {} — {} passed, {} failed, {} skipped ({} total) in {}s\n",
            marker,
            summary.browser,
            summary.passed,
            summary.failed,
            summary.skipped,
            summary.total,
            summary.duration_display(),
        ));
    }

    out.push_str(&format!(
        "\n=== Overall: {} passed, {} failed, {} skipped ({} total) — {}% success ===\n",
        aggregate.passed,
        aggregate.failed,
        aggregate.skipped,
        aggregate.total,
        aggregate.success_rate(),
    ));

    out
}
