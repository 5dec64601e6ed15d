use std::path::{Path, PathBuf};

use crate::input::cucumber::Feature;
use crate::log::logger::Logger;

// ============================================================================
// Input adapter — locate and parse per-browser report documents
// ============================================================================

/// A browser's parsed report plus the relative link to its own detailed
/// HTML report, derived from whichever filesystem layout the JSON was
/// found in.
#[derive(Debug, Clone)]
pub struct LocatedReport {
    pub browser: String,
    pub features: Vec<Feature>,
    pub detail_link: String,
}

/// Candidate locations for one browser's `cucumber-report.json`, probed in
/// order. CI artifact-download layouts come first, the local-run layout
/// last. Each candidate carries the matching detailed-report link.
pub fn candidate_paths(
    browser: &str,
    report_dir: &Path,
    downloads_dir: &Path,
) -> Vec<(PathBuf, String)> {
    vec![
        (
            downloads_dir
                .join(format!("json-report-{browser}"))
                .join("cucumber-report.json"),
            format!("browser-report-{browser}/index.html"),
        ),
        (
            downloads_dir
                .join(format!("{browser}-json-report"))
                .join("cucumber-report.json"),
            format!("browser-report-{browser}/index.html"),
        ),
        (
            report_dir.join(browser).join("cucumber-report.json"),
            format!("{browser}/index.html"),
        ),
    ]
}

/// Find and parse one browser's report. The first existing candidate that
/// parses as a feature array wins. An unreadable or malformed candidate is
/// logged and treated as not found; the probe then moves on. Returns `None`
/// when no candidate yields a usable document, never an error: one bad
/// browser must not sink the whole run.
pub fn load_browser_report(
    browser: &str,
    report_dir: &Path,
    downloads_dir: &Path,
    log: &Logger,
) -> Option<LocatedReport> {
    for (json_path, detail_link) in candidate_paths(browser, report_dir, downloads_dir) {
        if !json_path.exists() {
            continue;
        }

        let content = match std::fs::read_to_string(&json_path) {
            Ok(c) => c,
            Err(e) => {
                log.warn(&format!(
                    "could not read {} report at {}: {}",
                    browser,
                    json_path.display(),
                    e
                ));
                continue;
            }
        };

        match serde_json::from_str::<Vec<Feature>>(&content) {
            Ok(features) => {
                log.info(&format!(
                    "found {} report: {}",
                    browser,
                    json_path.display()
                ));
                return Some(LocatedReport {
                    browser: browser.to_string(),
                    features,
                    detail_link,
                });
            }
            Err(e) => {
                log.warn(&format!(
                    "could not parse {} report at {}: {}",
                    browser,
                    json_path.display(),
                    e
                ));
            }
        }
    }

    log.warn(&format!("no report found for {browser}"));
    None
}
