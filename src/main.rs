use std::path::Path;

use clap::Parser;
use report_combiner::cli::commands::{build_logger, cmd_clean, cmd_combine};
use report_combiner::cli::config::{build_combine_config, load_config, Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let log = build_logger(cli.verbose);

    match cli.command {
        Commands::Combine {
            report_dir,
            downloads_dir,
            output,
            browser,
            strict,
        } => {
            let cfg = build_combine_config(
                &config,
                report_dir.as_deref(),
                downloads_dir.as_deref(),
                output.as_deref(),
                &browser,
                strict,
            );
            let ok = cmd_combine(&cfg, &log)?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Clean { report_dir } => {
            let dir = report_dir.unwrap_or_else(|| config.report.dir.clone());
            cmd_clean(Path::new(&dir), &log)?;
        }
    }

    Ok(())
}
