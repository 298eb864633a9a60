//! Entry point for the i18n-sync CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use i18n_sync::Orchestrator;
use i18n_sync::config::{
    ConfigManager,
    SettingsOverrides,
};
use tracing_subscriber::EnvFilter;

/// Keep JSON locale files in sync with a reference locale.
///
/// Every key of the reference file is propagated into every sibling file in
/// the directory; sibling values are preserved, extra keys are kept and
/// sorted last, and every sibling is rewritten in the reference's key order.
#[derive(Debug, Parser)]
#[command(name = "i18n-sync", version, about)]
struct Cli {
    /// Directory containing the locale files
    dir: PathBuf,

    /// File name of the reference locale (default: en.json)
    #[arg(long)]
    reference: Option<String>,

    /// Glob matched against sibling file names (default: *.json)
    #[arg(long)]
    pattern: Option<String>,

    /// Number of files synchronized in parallel
    #[arg(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let overrides = SettingsOverrides {
        reference_file: cli.reference,
        file_pattern: cli.pattern,
        concurrency: cli.concurrency,
    };

    let mut config_manager = ConfigManager::new();
    if let Err(error) = config_manager.load_settings(cli.dir.clone(), &overrides) {
        tracing::error!(%error, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    let orchestrator = match Orchestrator::new(config_manager.get_settings().clone()) {
        Ok(orchestrator) => orchestrator,
        Err(error) => {
            tracing::error!(%error, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match orchestrator.run(&cli.dir).await {
        Ok(report) => {
            // Recreated or unwritable siblings are not fatal for the run;
            // only reference/directory failures abort with a non-zero exit.
            if !report.is_complete() {
                tracing::warn!(
                    failed = report.failed.len(),
                    "Some locale files could not be written"
                );
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "Synchronization aborted");
            ExitCode::FAILURE
        }
    }
}
