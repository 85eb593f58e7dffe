use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::FileSystemStore;
use crate::services::manifest_service::BuildReport;
use crate::services::{ManifestService, ScanningService};
use std::process::ExitCode;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

fn main() -> ExitCode {
    let config = Config::new();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(report) => {
            println!(
                "Wrote {} with {} entries.",
                report.path.display(),
                report.entries
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<BuildReport> {
    let service = ManifestService::new(
        Box::new(FileSystemStore::new(&config.output)),
        ScanningService::new(&config.games_dir, config.entry_prefix.as_str()),
    );
    service.process()
}
