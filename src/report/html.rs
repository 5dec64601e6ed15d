use crate::report::report_model::{AggregateSummary, BrowserReport};

// ============================================================================
// HTML renderer — combined cross-browser dashboard
// ============================================================================

/// Friendly display name for a browser identifier.
fn display_name(browser: &str) -> String {
    match browser {
        "chromium" => "Chromium".to_string(),
        "firefox" => "Firefox".to_string(),
        "webkit" => "WebKit".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

/// Icon shown on a browser card.
fn browser_icon(browser: &str) -> &'static str {
    match browser {
        "chromium" => "\u{1F310}",
        "firefox" => "\u{1F98A}",
        "webkit" => "\u{1F9ED}",
        _ => "\u{1F9EA}",
    }
}

/// Generate the combined report page.
///
/// Deterministic for identical inputs apart from `generated_at`, which is
/// embedded verbatim in the header. The overall status color follows the
/// aggregate failed count; each card's badge follows that browser's own
/// failed count. Detail links are emitted as given; whether the target
/// report exists is the caller's concern.
pub fn generate_combined_html(
    browsers: &[BrowserReport],
    aggregate: &AggregateSummary,
    generated_at: &str,
) -> String {
    let rate_color = if aggregate.all_passed() {
        "#48bb78"
    } else {
        "#f56565"
    };

    let mut cards = String::new();
    for report in browsers {
        let summary = &report.summary;
        let status = if summary.has_failures() {
            "failed"
        } else {
            "passed"
        };

        cards.push_str(&format!(
            r#"      <div class="browser-card">
        <div class="browser-header">
          <div class="browser-name">
            <div class="browser-icon {id}">{icon}</div>
            <span>{name}</span>
          </div>
          <span class="status-badge {status}">{status}</span>
        </div>
        <div class="browser-stats">
          <div class="stat-item">
            <div class="stat-label">Passed</div>
            <div class="stat-value passed">{passed}</div>
          </div>
          <div class="stat-item">
            <div class="stat-label">Failed</div>
            <div class="stat-value failed">{failed}</div>
          </div>
          <div class="stat-item">
            <div class="stat-label">Skipped</div>
            <div class="stat-value skipped">{skipped}</div>
          </div>
          <div class="stat-item">
            <div class="stat-label">Duration</div>
            <div class="stat-value duration">{duration}s</div>
          </div>
        </div>
        <a href="{link}" class="view-report-btn">View Detailed Report</a>
      </div>
"#,
            id = escape_html(&summary.browser),
            icon = browser_icon(&summary.browser),
            name = escape_html(&display_name(&summary.browser)),
            status = status,
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            duration = summary.duration_display(),
            link = escape_html(&report.detail_link),
        ));
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Cross-Browser Test Report</title>
  <style>
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}

    body {{
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      padding: 20px;
    }}

    .container {{ max-width: 1200px; margin: 0 auto; }}

    .header {{
      background: white;
      border-radius: 12px;
      padding: 30px;
      margin-bottom: 30px;
      box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
    }}
    .header h1 {{ font-size: 32px; color: #2d3748; margin-bottom: 10px; }}
    .header .subtitle {{ color: #718096; font-size: 16px; }}
    .timestamp {{ color: #a0aec0; font-size: 14px; margin-top: 10px; }}

    .summary {{
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 20px;
      margin-bottom: 30px;
    }}
    .summary-card {{
      background: white;
      border-radius: 12px;
      padding: 25px;
      box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
      text-align: center;
    }}
    .summary-card .label {{
      color: #718096;
      font-size: 14px;
      text-transform: uppercase;
      font-weight: 600;
      margin-bottom: 10px;
    }}
    .summary-card .value {{ font-size: 36px; font-weight: bold; }}
    .summary-card.passed .value {{ color: #48bb78; }}
    .summary-card.failed .value {{ color: #f56565; }}
    .summary-card.skipped .value {{ color: #ecc94b; }}
    .summary-card.total .value {{ color: #4299e1; }}
    .summary-card.rate .value {{ color: {rate_color}; }}

    .browsers-grid {{
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
      gap: 25px;
      margin-bottom: 30px;
    }}
    .browser-card {{
      background: white;
      border-radius: 12px;
      padding: 25px;
      box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
    }}
    .browser-header {{
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 20px;
      padding-bottom: 15px;
      border-bottom: 2px solid #e2e8f0;
    }}
    .browser-name {{
      display: flex;
      align-items: center;
      gap: 12px;
      font-size: 24px;
      font-weight: bold;
      color: #2d3748;
    }}
    .browser-icon {{
      width: 40px;
      height: 40px;
      border-radius: 8px;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 24px;
      background: #e2e8f0;
    }}
    .browser-icon.chromium {{ background: linear-gradient(135deg, #4285f4, #34a853); }}
    .browser-icon.firefox {{ background: linear-gradient(135deg, #ff7139, #e66000); }}
    .browser-icon.webkit {{ background: linear-gradient(135deg, #147efb, #0d5fd9); }}

    .status-badge {{
      padding: 6px 16px;
      border-radius: 20px;
      font-size: 12px;
      font-weight: 600;
      text-transform: uppercase;
    }}
    .status-badge.passed {{ background: #c6f6d5; color: #22543d; }}
    .status-badge.failed {{ background: #fed7d7; color: #742a2a; }}

    .browser-stats {{
      display: grid;
      grid-template-columns: repeat(2, 1fr);
      gap: 15px;
      margin-bottom: 20px;
    }}
    .stat-item {{ padding: 12px; border-radius: 8px; background: #f7fafc; }}
    .stat-label {{ font-size: 12px; color: #718096; margin-bottom: 5px; font-weight: 600; }}
    .stat-value {{ font-size: 24px; font-weight: bold; }}
    .stat-value.passed {{ color: #48bb78; }}
    .stat-value.failed {{ color: #f56565; }}
    .stat-value.skipped {{ color: #ecc94b; }}
    .stat-value.duration {{ color: #667eea; }}

    .view-report-btn {{
      display: block;
      width: 100%;
      padding: 14px;
      background: linear-gradient(135deg, #667eea, #764ba2);
      color: white;
      text-align: center;
      text-decoration: none;
      border-radius: 8px;
      font-weight: 600;
      font-size: 14px;
      text-transform: uppercase;
      letter-spacing: 0.5px;
    }}

    .footer {{
      background: white;
      border-radius: 12px;
      padding: 20px;
      text-align: center;
      color: #718096;
      font-size: 14px;
      box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
    }}

    @media (max-width: 768px) {{
      .browsers-grid {{ grid-template-columns: 1fr; }}
      .summary {{ grid-template-columns: repeat(2, 1fr); }}
    }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>Cross-Browser Test Report</h1>
      <div class="subtitle">Combined results across all tested browsers</div>
      <div class="timestamp">Generated on {generated_at}</div>
    </div>

    <div class="summary">
      <div class="summary-card passed">
        <div class="label">Passed</div>
        <div class="value">{passed}</div>
      </div>
      <div class="summary-card failed">
        <div class="label">Failed</div>
        <div class="value">{failed}</div>
      </div>
      <div class="summary-card skipped">
        <div class="label">Skipped</div>
        <div class="value">{skipped}</div>
      </div>
      <div class="summary-card total">
        <div class="label">Total Tests</div>
        <div class="value">{total}</div>
      </div>
      <div class="summary-card rate">
        <div class="label">Success Rate</div>
        <div class="value">{rate}%</div>
      </div>
    </div>

    <div class="browsers-grid">
{cards}    </div>

    <div class="footer">
      <p>Combined report over {browser_count} browser run(s)</p>
    </div>
  </div>
</body>
</html>"##,
        rate_color = rate_color,
        generated_at = escape_html(generated_at),
        passed = aggregate.passed,
        failed = aggregate.failed,
        skipped = aggregate.skipped,
        total = aggregate.total,
        rate = aggregate.success_rate(),
        cards = cards,
        browser_count = browsers.len(),
    )
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
