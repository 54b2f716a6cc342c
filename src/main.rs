mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod sbom_pipeline;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    CsvSummaryWriter, FileErrorLog, FileSystemReader, FileSystemResultStore,
};
use adapters::outbound::process::{GitFetcher, OrtCli, ScanCodeCli};
use application::dto::{BatchRequest, GlobalBatchRequest, RunMode};
use application::use_cases::{RunGlobalBatchUseCase, RunIndividualBatchUseCase};
use cli::Args;
use config::Settings;
use ports::outbound::RepositorySetReader;
use sbom_pipeline::domain::{RepoEntry, SUMMARY_FILE};
use shared::error::ExitCode;
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const INDIVIDUAL_ERROR_LOG: &str = "error_log.txt";
const GLOBAL_ERROR_LOG: &str = "error_log_global.txt";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ConfigurationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with 2 on usage errors)
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(&args, config);

    // Nothing is touched unless the repository set is valid
    let repos = FileSystemReader::new().read_repository_set(&settings.repos_file)?;

    eprintln!(
        "📋 Loaded {} repositories from {} ({} mode)",
        repos.len(),
        settings.repos_file.display(),
        settings.mode
    );

    match settings.mode {
        RunMode::Individual => run_individual(&settings, repos).await,
        RunMode::Global => run_global(&settings, repos).await,
    }
}

async fn run_individual(settings: &Settings, repos: Vec<RepoEntry>) -> Result<()> {
    // Create adapters (Dependency Injection)
    let use_case = RunIndividualBatchUseCase::new(
        GitFetcher::new(settings.git_cli.as_str()),
        OrtCli::new(settings.ort_cli.as_str()),
        ScanCodeCli::new(settings.scancode_cli.as_str(), settings.scancode_processes),
        FileSystemResultStore::new(),
        CsvSummaryWriter::new(settings.output_dir.join(SUMMARY_FILE)),
        FileErrorLog::new(PathBuf::from(INDIVIDUAL_ERROR_LOG)),
        StderrProgressReporter::new(),
    );

    let request = BatchRequest::new(repos, settings.output_dir.clone(), settings.skip_existing);
    let response = use_case.execute(request).await?;

    if response.failed_count() > 0 || response.scan_failed_count() > 0 {
        eprintln!("📄 Failures were recorded in {}", INDIVIDUAL_ERROR_LOG);
    }
    Ok(())
}

async fn run_global(settings: &Settings, repos: Vec<RepoEntry>) -> Result<()> {
    if settings.skip_existing {
        eprintln!("⚠️  Warning: --skip-existing has no effect in global mode and will be ignored.");
    }

    let use_case = RunGlobalBatchUseCase::new(
        GitFetcher::new(settings.git_cli.as_str()),
        OrtCli::new(settings.ort_cli.as_str()),
        ScanCodeCli::new(settings.scancode_cli.as_str(), settings.scancode_processes),
        FileSystemResultStore::new(),
        FileErrorLog::new(PathBuf::from(GLOBAL_ERROR_LOG)),
        StderrProgressReporter::new(),
    );

    let request = GlobalBatchRequest::new(
        repos,
        settings.output_dir.clone(),
        settings.workspace_dir.clone(),
    );
    let response = use_case.execute(request).await?;

    if !response.failed_clones.is_empty() || !response.analysis_succeeded || !response.scan_succeeded
    {
        eprintln!("📄 Failures were recorded in {}", GLOBAL_ERROR_LOG);
    }
    Ok(())
}
