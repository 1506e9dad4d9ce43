//! Explainer CLI binary.
//!
//! Generates a narration script and an animation blueprint for a topic and
//! writes them as JSON files. Exit codes identify the failure category.

use clap::Parser;
use explainer::{ObservabilityConfig, init_observability_with_config};
use std::process::ExitCode;
use tracing::{error, info};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, parse_error_exit_code, run_pipeline};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = parse_error_exit_code(&e);
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // Initialize tracing
    let mut observability = ObservabilityConfig::new("explainer").with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    if let Err(e) = init_observability_with_config(observability) {
        eprintln!("{}", e);
        return ExitCode::from(e.exit_code());
    }

    match run_pipeline(&cli).await {
        Ok(report) => {
            info!(
                scenes = report.script().len(),
                seconds = report.render_blueprint().total_duration_seconds(),
                "Explainer synthesis complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(
                error = %e,
                category = %e.category(),
                "An error occurred during the synthesis process"
            );
            ExitCode::from(e.exit_code())
        }
    }
}
