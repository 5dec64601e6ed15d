use clap::Parser;
use report_combiner::cli::config::{
    build_combine_config, load_config, AppConfig, Cli, Commands,
};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_combine_minimal() {
    let cli = Cli::parse_from(["report-combiner", "combine"]);
    match cli.command {
        Commands::Combine {
            report_dir,
            downloads_dir,
            output,
            browser,
            strict,
        } => {
            assert!(report_dir.is_none());
            assert!(downloads_dir.is_none());
            assert!(output.is_none());
            assert!(browser.is_empty());
            assert!(!strict);
        }
        _ => panic!("Expected Combine command"),
    }
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_combine_all_args() {
    let cli = Cli::parse_from([
        "report-combiner",
        "combine",
        "--report-dir",
        "out/reports",
        "--downloads-dir",
        "artifacts",
        "--output",
        "out/combined.html",
        "--browser",
        "chromium",
        "--browser",
        "firefox",
        "--strict",
        "-v",
    ]);
    match cli.command {
        Commands::Combine {
            report_dir,
            downloads_dir,
            output,
            browser,
            strict,
        } => {
            assert_eq!(report_dir.as_deref(), Some("out/reports"));
            assert_eq!(downloads_dir.as_deref(), Some("artifacts"));
            assert_eq!(output.as_deref(), Some("out/combined.html"));
            assert_eq!(browser, vec!["chromium", "firefox"]);
            assert!(strict);
        }
        _ => panic!("Expected Combine command"),
    }
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_parse_clean() {
    let cli = Cli::parse_from(["report-combiner", "clean", "--report-dir", "old-reports"]);
    match cli.command {
        Commands::Clean { report_dir } => {
            assert_eq!(report_dir.as_deref(), Some("old-reports"));
        }
        _ => panic!("Expected Clean command"),
    }
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn load_config_defaults_when_missing() {
    let config = load_config(Some("/nonexistent/report-combiner.yaml"));
    assert_eq!(config.report.dir, "reports");
    assert_eq!(config.report.downloads_dir, "downloaded-reports");
    assert!(config.report.output.is_none());
    assert!(!config.report.strict);
    assert_eq!(config.browsers, vec!["chromium", "firefox", "webkit"]);
}

#[test]
fn load_config_from_yaml_file() {
    use std::io::Write;

    let dir = std::env::temp_dir().join("report_combiner_cli_test");
    std::fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("report-combiner.yaml");

    let yaml = r##"
report:
  dir: "ci-reports"
  strict: true
browsers:
  - chromium
  - firefox
"##;

    let mut f = std::fs::File::create(&config_path).unwrap();
    f.write_all(yaml.as_bytes()).unwrap();

    let config = load_config(config_path.to_str());
    assert_eq!(config.report.dir, "ci-reports");
    assert!(config.report.strict);
    // Unspecified fields keep their defaults
    assert_eq!(config.report.downloads_dir, "downloaded-reports");
    assert_eq!(config.browsers, vec!["chromium", "firefox"]);

    std::fs::remove_file(&config_path).ok();
    std::fs::remove_dir(&dir).ok();
}

#[test]
fn load_config_malformed_yields_defaults() {
    use std::io::Write;

    let dir = std::env::temp_dir().join("report_combiner_cli_malformed_test");
    std::fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("report-combiner.yaml");

    let mut f = std::fs::File::create(&config_path).unwrap();
    f.write_all(b"report: [this is: not valid").unwrap();

    let config = load_config(config_path.to_str());
    assert_eq!(config.report.dir, "reports");
    assert_eq!(config.browsers.len(), 3);

    std::fs::remove_file(&config_path).ok();
    std::fs::remove_dir(&dir).ok();
}

// ============================================================================
// Resolved Config Tests
// ============================================================================

#[test]
fn build_combine_config_defaults() {
    let config = AppConfig::default();
    let cfg = build_combine_config(&config, None, None, None, &[], false);
    assert_eq!(cfg.report_dir.to_str().unwrap(), "reports");
    assert_eq!(cfg.downloads_dir.to_str().unwrap(), "downloaded-reports");
    assert_eq!(cfg.output.to_str().unwrap(), "reports/index.html");
    assert_eq!(cfg.browsers, vec!["chromium", "firefox", "webkit"]);
    assert!(!cfg.strict);
}

#[test]
fn build_combine_config_cli_overrides() {
    let config = AppConfig::default();
    let browsers = vec!["firefox".to_string()];
    let cfg = build_combine_config(
        &config,
        Some("out"),
        Some("artifacts"),
        Some("dash.html"),
        &browsers,
        true,
    );
    assert_eq!(cfg.report_dir.to_str().unwrap(), "out");
    assert_eq!(cfg.downloads_dir.to_str().unwrap(), "artifacts");
    assert_eq!(cfg.output.to_str().unwrap(), "dash.html");
    assert_eq!(cfg.browsers, vec!["firefox"]);
    assert!(cfg.strict);
}

#[test]
fn build_combine_config_output_follows_report_dir() {
    let config = AppConfig::default();
    let cfg = build_combine_config(&config, Some("ci-out"), None, None, &[], false);
    assert_eq!(cfg.output.to_str().unwrap(), "ci-out/index.html");
}

#[test]
fn build_combine_config_strict_from_file() {
    let mut config = AppConfig::default();
    config.report.strict = true;
    let cfg = build_combine_config(&config, None, None, None, &[], false);
    assert!(cfg.strict);
}
