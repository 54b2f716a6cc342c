//! Stage steps shared by the individual and global batch drivers.
//!
//! Each step maps adapter failures to the `PipelineError` variant of its
//! stage; recording the failure is left to the caller.

use crate::ports::outbound::{
    DependencyAnalysisTool, ErrorLog, LicenseScanner, ProgressReporter, ResultStore,
    SourceFetcher,
};
use crate::sbom_pipeline::domain::{ErrorRecord, ErrorScope, ResultDirectory, Stage};
use crate::sbom_pipeline::services::DependencyCounter;
use crate::shared::error::PipelineError;
use std::path::Path;

type StageResult = std::result::Result<(), PipelineError>;

/// Shallow-clones `url` into `destination`
pub(super) async fn clone_into<SF: SourceFetcher>(
    fetcher: &SF,
    scope: &ErrorScope,
    url: &str,
    destination: &Path,
) -> StageResult {
    fetcher
        .fetch(url, destination)
        .await
        .map_err(|e| PipelineError::Clone {
            scope: scope.clone(),
            cause: e.to_string(),
        })
}

/// Runs `analyze` then `report` into `result_dir`.
///
/// The directory is created first; a failure to create it is attributed to
/// the Analyze step since no tool output can be produced without it.
pub(super) async fn analyze_and_report<DA: DependencyAnalysisTool, RS: ResultStore>(
    tool: &DA,
    store: &RS,
    scope: &ErrorScope,
    input: &Path,
    result_dir: &ResultDirectory,
) -> StageResult {
    let analyze_error = |cause: String| PipelineError::Analyze {
        scope: scope.clone(),
        step: Stage::Analyze,
        cause,
    };

    store
        .prepare_directory(result_dir.path())
        .map_err(|e| analyze_error(e.to_string()))?;

    tool.analyze(input, result_dir.path())
        .await
        .map_err(|e| analyze_error(e.to_string()))?;

    tool.report(&result_dir.analyzer_result(), result_dir.path())
        .await
        .map_err(|e| PipelineError::Analyze {
            scope: scope.clone(),
            step: Stage::Report,
            cause: e.to_string(),
        })
}

/// Runs the license scan over `input` into the directory's scan report
pub(super) async fn scan<LS: LicenseScanner>(
    scanner: &LS,
    scope: &ErrorScope,
    input: &Path,
    result_dir: &ResultDirectory,
) -> StageResult {
    scanner
        .scan(input, &result_dir.scan_report())
        .await
        .map_err(|e| PipelineError::Scan {
            scope: scope.clone(),
            cause: e.to_string(),
        })
}

/// Best-effort dependency count of the directory's analyzer result.
///
/// An unreadable result counts as 0 and is reported on the console.
pub(super) fn count_dependencies<RS: ResultStore, PR: ProgressReporter>(
    store: &RS,
    reporter: &PR,
    result_dir: &ResultDirectory,
) -> usize {
    match store.read_analyzer_result(&result_dir.analyzer_result()) {
        Ok(content) => DependencyCounter::count(&content),
        Err(e) => {
            reporter.report_error(&format!(
                "⚠️  Could not read the analyzer result, counting 0 dependencies: {}",
                e
            ));
            0
        }
    }
}

/// Reports a stage failure on the console and appends it to the error log.
///
/// Never fails: an unwritable error log is itself only reported.
pub(super) fn record_failure<EL: ErrorLog, PR: ProgressReporter>(
    error_log: &EL,
    reporter: &PR,
    error: &PipelineError,
) {
    reporter.report_error(&error.to_string());

    let Some(record) = ErrorRecord::from_error(error) else {
        return;
    };

    if let Err(e) = error_log.append(&record) {
        reporter.report_error(&format!("⚠️  Could not write to the error log: {}", e));
    }
}
