use std::path::Path;

use crate::cli::config::CombineConfig;
use crate::input::locate::load_browser_report;
use crate::log::logger::{LogLevel, Logger};
use crate::report::console::format_console_summary;
use crate::report::html::generate_combined_html;
use crate::report::report_model::{combine, summarize, BrowserReport};

// ============================================================================
// combine subcommand
// ============================================================================

/// Run the full pipeline: locate per-browser reports, aggregate, render,
/// write the combined page. Returns whether the invocation should count as
/// successful: false when nothing was found, or when `strict` is set and
/// some expected browser was missing. Only the final write is fatal.
pub fn cmd_combine(cfg: &CombineConfig, log: &Logger) -> Result<bool, Box<dyn std::error::Error>> {
    log.info("generating combined test report...");

    let mut located = Vec::new();
    for browser in &cfg.browsers {
        if let Some(report) =
            load_browser_report(browser, &cfg.report_dir, &cfg.downloads_dir, log)
        {
            located.push(report);
        }
    }

    if located.is_empty() {
        log.error("no browser reports found; skipping combined report");
        return Ok(false);
    }

    let browser_reports: Vec<BrowserReport> = located
        .iter()
        .map(|r| BrowserReport {
            summary: summarize(&r.browser, &r.features),
            detail_link: r.detail_link.clone(),
        })
        .collect();

    let summaries: Vec<_> = browser_reports.iter().map(|r| r.summary.clone()).collect();
    let aggregate = combine(&summaries);

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = generate_combined_html(&browser_reports, &aggregate, &generated_at);

    if let Some(parent) = cfg.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&cfg.output, &html)?;

    log.info(&format!(
        "combined report written to {}",
        cfg.output.display()
    ));
    print!("{}", format_console_summary(&browser_reports, &aggregate));

    let complete = located.len() == cfg.browsers.len();
    if !complete {
        log.warn(&format!(
            "found reports for {} of {} expected browsers",
            located.len(),
            cfg.browsers.len()
        ));
    }

    Ok(complete || !cfg.strict)
}

// ============================================================================
// clean subcommand
// ============================================================================

/// Empty the artifact directories from a previous run. Directories that do
/// not exist are skipped; a directory that cannot be emptied is a warning,
/// matching the best-effort contract of the rest of the input side.
pub fn cmd_clean(report_dir: &Path, log: &Logger) -> Result<(), Box<dyn std::error::Error>> {
    for dir in [report_dir, Path::new("screenshots"), Path::new("traces")] {
        if !dir.exists() {
            continue;
        }
        match empty_dir(dir) {
            Ok(()) => log.info(&format!("cleaned {} directory", dir.display())),
            Err(e) => log.warn(&format!("could not clean {}: {}", dir.display(), e)),
        }
    }

    Ok(())
}

/// Remove a directory's contents while keeping the directory itself.
fn empty_dir(dir: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Logger for a command invocation: `-v` forces debug, otherwise the level
/// comes from `LOG_LEVEL`. Lines are mirrored into `logs/report-combiner.log`.
pub fn build_logger(verbose: u8) -> Logger {
    let level = if verbose > 0 {
        LogLevel::Debug
    } else {
        LogLevel::from_env()
    };
    Logger::with_file(level, Path::new("logs/report-combiner.log"))
}
