use super::stages;
use crate::application::dto::{BatchRequest, BatchResponse};
use crate::ports::outbound::{
    DependencyAnalysisTool, ErrorLog, LicenseScanner, ProgressReporter, ResultStore,
    SourceFetcher, SummaryStore,
};
use crate::sbom_pipeline::domain::{
    ErrorScope, RepoEntry, RepoOutcome, RepoState, ResultDirectory, Stage, SummaryRow,
};
use crate::sbom_pipeline::policies::SkipExistingPolicy;
use crate::shared::error::PipelineError;
use crate::shared::Result;
use tempfile::TempDir;

/// Prefix of the per-repository scratch checkout directories
const SCRATCH_PREFIX: &str = "repo-sbom-";

/// RunIndividualBatchUseCase - Per-repository SBOM batch
///
/// Processes repositories strictly one after another. Each repository is
/// cloned into its own scratch directory, analyzed, reported and scanned
/// into `<results_root>/<name>/`, and gets one summary row. A failure is
/// logged and only ends the current repository.
///
/// # Type Parameters
/// * `SF` - SourceFetcher implementation
/// * `DA` - DependencyAnalysisTool implementation
/// * `LS` - LicenseScanner implementation
/// * `RS` - ResultStore implementation
/// * `SS` - SummaryStore implementation
/// * `EL` - ErrorLog implementation
/// * `PR` - ProgressReporter implementation
pub struct RunIndividualBatchUseCase<SF, DA, LS, RS, SS, EL, PR> {
    source_fetcher: SF,
    analysis_tool: DA,
    license_scanner: LS,
    result_store: RS,
    summary_store: SS,
    error_log: EL,
    progress_reporter: PR,
}

impl<SF, DA, LS, RS, SS, EL, PR> RunIndividualBatchUseCase<SF, DA, LS, RS, SS, EL, PR>
where
    SF: SourceFetcher,
    DA: DependencyAnalysisTool,
    LS: LicenseScanner,
    RS: ResultStore,
    SS: SummaryStore,
    EL: ErrorLog,
    PR: ProgressReporter,
{
    /// Creates a new RunIndividualBatchUseCase with injected dependencies
    pub fn new(
        source_fetcher: SF,
        analysis_tool: DA,
        license_scanner: LS,
        result_store: RS,
        summary_store: SS,
        error_log: EL,
        progress_reporter: PR,
    ) -> Self {
        Self {
            source_fetcher,
            analysis_tool,
            license_scanner,
            result_store,
            summary_store,
            error_log,
            progress_reporter,
        }
    }

    /// Executes the batch
    ///
    /// # Returns
    /// One outcome per repository, in input order
    ///
    /// # Errors
    /// Only setup failures (results root, error log or summary header
    /// cannot be written) are returned; per-repository failures end up in
    /// the error log and in the outcomes.
    pub async fn execute(&self, request: BatchRequest) -> Result<BatchResponse> {
        // Step 1: Prepare outputs shared by the whole batch
        self.prepare_batch(&request)?;

        // Step 2: Process repositories one at a time
        let total = request.repos.len();
        let mut outcomes = Vec::with_capacity(total);
        for (index, entry) in request.repos.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(entry.name().as_str()));
            outcomes.push(self.process_repo(entry, &request).await);
        }

        // Step 3: Summarize
        let response = BatchResponse::new(outcomes);
        self.report_completion(&response);
        Ok(response)
    }

    fn prepare_batch(&self, request: &BatchRequest) -> Result<()> {
        self.error_log.reset()?;
        self.result_store.prepare_directory(&request.results_root)?;
        self.summary_store.ensure_header()?;
        Ok(())
    }

    /// Drives one repository from `Pending` to a terminal state
    async fn process_repo(&self, entry: &RepoEntry, request: &BatchRequest) -> RepoOutcome {
        let mut outcome = RepoOutcome::new(entry.name().clone());
        let result_dir = ResultDirectory::for_repo(&request.results_root, entry.name());
        let scope = ErrorScope::Repo(entry.name().clone());

        // The clone is attempted for every entry, even one whose results are
        // already present
        outcome.state = outcome.state.advance();
        let scratch = match self.acquire(entry, &scope).await {
            Ok(scratch) => scratch,
            Err(error) => {
                self.record_stage_failure(&mut outcome, &error);
                return outcome;
            }
        };

        if self.is_already_analyzed(request.skip_existing, &result_dir) {
            self.progress_reporter.report(&format!(
                "[↪] Results already present for {}, skipping (--skip-existing)",
                entry.name()
            ));
            outcome.skipped = true;
            outcome.state = RepoState::Done;
        } else {
            outcome.state = outcome.state.advance();
            self.run_tools(&mut outcome, &scope, &scratch, &result_dir)
                .await;
        }

        self.release_scratch(scratch);
        debug_assert!(outcome.state.is_terminal());
        outcome
    }

    fn is_already_analyzed(&self, skip_existing: bool, result_dir: &ResultDirectory) -> bool {
        let present = result_dir
            .artifacts()
            .map(|artifact| self.result_store.artifact_exists(&artifact));
        SkipExistingPolicy::should_skip(skip_existing, &present)
    }

    /// Clones the repository into a fresh scratch directory
    async fn acquire(
        &self,
        entry: &RepoEntry,
        scope: &ErrorScope,
    ) -> std::result::Result<TempDir, PipelineError> {
        let scratch = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir()
            .map_err(|e| PipelineError::Clone {
                scope: scope.clone(),
                cause: format!("Failed to create scratch directory: {}", e),
            })?;

        stages::clone_into(&self.source_fetcher, scope, entry.url(), scratch.path()).await?;
        Ok(scratch)
    }

    /// Analyze, report, scan and summarize a checked-out repository
    async fn run_tools(
        &self,
        outcome: &mut RepoOutcome,
        scope: &ErrorScope,
        scratch: &TempDir,
        result_dir: &ResultDirectory,
    ) {
        if let Err(error) = stages::analyze_and_report(
            &self.analysis_tool,
            &self.result_store,
            scope,
            scratch.path(),
            result_dir,
        )
        .await
        {
            self.record_stage_failure(outcome, &error);
            return;
        }

        outcome.state = outcome.state.advance();
        match stages::scan(&self.license_scanner, scope, scratch.path(), result_dir).await {
            Ok(()) => self
                .progress_reporter
                .report_success(&format!("ScanCode report generated for {}", outcome.name)),
            Err(error) => {
                if self.record_stage_failure(outcome, &error) {
                    return;
                }
            }
        }

        let count =
            stages::count_dependencies(&self.result_store, &self.progress_reporter, result_dir);
        let row = SummaryRow::new(outcome.name.clone(), count);
        if let Err(e) = self.summary_store.append_row(&row) {
            self.progress_reporter.report_error(&format!(
                "⚠️  Could not append {} to the summary: {}",
                outcome.name, e
            ));
        }

        outcome.dependency_count = Some(count);
        outcome.state = outcome.state.advance();
        self.progress_reporter.report_success(&format!(
            "SBOM generated for {} ({} dependencies)",
            outcome.name, count
        ));
    }

    /// Records a stage failure on the console and in the error log.
    ///
    /// Returns `true` when the repository ended in `Failed` and gets no
    /// summary row; otherwise it is only flagged as a scan failure.
    fn record_stage_failure(&self, outcome: &mut RepoOutcome, error: &PipelineError) -> bool {
        let stage = error
            .stage_context()
            .map(|(_, stage, _)| stage)
            .unwrap_or(Stage::Clone);
        stages::record_failure(&self.error_log, &self.progress_reporter, error);

        if stage.blocks_summary() {
            outcome.state = outcome.state.fail(stage);
            true
        } else {
            outcome.scan_failed = true;
            false
        }
    }

    fn release_scratch(&self, scratch: TempDir) {
        let path = scratch.path().to_path_buf();
        if let Err(e) = scratch.close() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Could not remove scratch directory {}: {}",
                path.display(),
                e
            ));
        }
    }

    fn report_completion(&self, response: &BatchResponse) {
        self.progress_reporter.report_completion(&format!(
            "✅ Batch complete: {} analyzed, {} skipped, {} failed, {} scan failure(s)",
            response.summarized_count(),
            response.skipped_count(),
            response.failed_count(),
            response.scan_failed_count()
        ));
    }
}
