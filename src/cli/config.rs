use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "report-combiner",
    version,
    about = "Combine per-browser Cucumber JSON results into one HTML dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: report-combiner.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Combine per-browser JSON reports into a single HTML dashboard
    Combine {
        /// Root reports directory (local-run layout)
        #[arg(long)]
        report_dir: Option<String>,

        /// Downloaded-artifacts directory (CI layout)
        #[arg(long)]
        downloads_dir: Option<String>,

        /// Output path for the combined page (default: <report-dir>/index.html)
        #[arg(short, long)]
        output: Option<String>,

        /// Browser to include (repeatable; default: chromium, firefox, webkit)
        #[arg(long)]
        browser: Vec<String>,

        /// Exit non-zero when fewer browsers are found than expected
        #[arg(long)]
        strict: bool,
    },

    /// Remove artifacts from previous runs (reports, screenshots, traces)
    Clean {
        /// Root reports directory to empty
        #[arg(long)]
        report_dir: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `report-combiner.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default = "default_browsers")]
    pub browsers: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report: ReportConfig::default(),
            browsers: default_browsers(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_dir")]
    pub dir: String,

    #[serde(default = "default_downloads_dir")]
    pub downloads_dir: String,

    pub output: Option<String>,

    #[serde(default)]
    pub strict: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dir: "reports".to_string(),
            downloads_dir: "downloaded-reports".to_string(),
            output: None,
            strict: false,
        }
    }
}

// Serde default helpers
fn default_browsers() -> Vec<String> {
    vec![
        "chromium".to_string(),
        "firefox".to_string(),
        "webkit".to_string(),
    ]
}
fn default_report_dir() -> String {
    "reports".to_string()
}
fn default_downloads_dir() -> String {
    "downloaded-reports".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("report-combiner.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolved settings (merge CLI args with config file)
// ============================================================================

/// Fully-resolved settings for one combine invocation. Built once at startup
/// and passed by value into the pipeline; nothing reads global state after
/// this point.
#[derive(Debug, Clone)]
pub struct CombineConfig {
    pub report_dir: PathBuf,
    pub downloads_dir: PathBuf,
    pub output: PathBuf,
    pub browsers: Vec<String>,
    pub strict: bool,
}

/// Merge CLI arguments over the config file. CLI wins per field; the output
/// path defaults to `index.html` inside the resolved report dir.
pub fn build_combine_config(
    config: &AppConfig,
    report_dir: Option<&str>,
    downloads_dir: Option<&str>,
    output: Option<&str>,
    browsers: &[String],
    strict: bool,
) -> CombineConfig {
    let report_dir = PathBuf::from(report_dir.unwrap_or(&config.report.dir));
    let downloads_dir = PathBuf::from(downloads_dir.unwrap_or(&config.report.downloads_dir));

    let output = match (output, &config.report.output) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => report_dir.join("index.html"),
    };

    let browsers = if browsers.is_empty() {
        config.browsers.clone()
    } else {
        browsers.to_vec()
    };

    CombineConfig {
        report_dir,
        downloads_dir,
        output,
        browsers,
        strict: strict || config.report.strict,
    }
}
