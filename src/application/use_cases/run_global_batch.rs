use super::stages;
use crate::application::dto::{GlobalBatchRequest, GlobalBatchResponse};
use crate::ports::outbound::{
    DependencyAnalysisTool, ErrorLog, LicenseScanner, ProgressReporter, ResultStore,
    SourceFetcher,
};
use crate::sbom_pipeline::domain::{ErrorScope, RepoEntry, ResultDirectory};
use crate::shared::Result;

/// RunGlobalBatchUseCase - One combined SBOM over a shared workspace
///
/// Every repository is cloned into `<workspace>/<name>/`, which is kept
/// between runs. The analysis and the license scan then each run once over
/// the whole workspace into `<results_root>/_global/`.
///
/// # Type Parameters
/// * `SF` - SourceFetcher implementation
/// * `DA` - DependencyAnalysisTool implementation
/// * `LS` - LicenseScanner implementation
/// * `RS` - ResultStore implementation
/// * `EL` - ErrorLog implementation
/// * `PR` - ProgressReporter implementation
pub struct RunGlobalBatchUseCase<SF, DA, LS, RS, EL, PR> {
    source_fetcher: SF,
    analysis_tool: DA,
    license_scanner: LS,
    result_store: RS,
    error_log: EL,
    progress_reporter: PR,
}

impl<SF, DA, LS, RS, EL, PR> RunGlobalBatchUseCase<SF, DA, LS, RS, EL, PR>
where
    SF: SourceFetcher,
    DA: DependencyAnalysisTool,
    LS: LicenseScanner,
    RS: ResultStore,
    EL: ErrorLog,
    PR: ProgressReporter,
{
    pub fn new(
        source_fetcher: SF,
        analysis_tool: DA,
        license_scanner: LS,
        result_store: RS,
        error_log: EL,
        progress_reporter: PR,
    ) -> Self {
        Self {
            source_fetcher,
            analysis_tool,
            license_scanner,
            result_store,
            error_log,
            progress_reporter,
        }
    }

    /// Executes the global batch
    ///
    /// # Errors
    /// Only setup failures (error log, workspace or results root cannot be
    /// written) are returned. Clone, ORT and ScanCode failures are logged.
    pub async fn execute(&self, request: GlobalBatchRequest) -> Result<GlobalBatchResponse> {
        self.error_log.reset()?;
        self.result_store.prepare_directory(&request.workspace_dir)?;
        self.result_store.prepare_directory(&request.results_root)?;

        let mut response = GlobalBatchResponse::default();

        // Step 1: Populate the workspace
        let total = request.repos.len();
        for (index, entry) in request.repos.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(entry.name().as_str()));
            if self.clone_into_workspace(entry, &request).await {
                response.cloned.push(entry.name().clone());
            } else {
                response.failed_clones.push(entry.name().clone());
            }
        }

        let result_dir = ResultDirectory::global(&request.results_root);

        // Step 2: One analysis over the whole workspace
        self.progress_reporter
            .report("🔍 Running ORT over the whole workspace...");
        match stages::analyze_and_report(
            &self.analysis_tool,
            &self.result_store,
            &ErrorScope::Global,
            &request.workspace_dir,
            &result_dir,
        )
        .await
        {
            Ok(()) => {
                let count = stages::count_dependencies(&self.result_store, &self.progress_reporter, &result_dir);
                self.progress_reporter.report_success(&format!(
                    "Global SBOM generated ({} distinct dependencies)",
                    count
                ));
                response.analysis_succeeded = true;
                response.dependency_count = Some(count);
            }
            Err(error) => {
                stages::record_failure(&self.error_log, &self.progress_reporter, &error)
            }
        }

        // Step 3: One scan over the whole workspace, whatever ORT did
        self.progress_reporter
            .report("🔍 Running ScanCode over the whole workspace...");
        match stages::scan(
            &self.license_scanner,
            &ErrorScope::Global,
            &request.workspace_dir,
            &result_dir,
        )
        .await
        {
            Ok(()) => {
                self.progress_reporter
                    .report_success("Global ScanCode report generated");
                response.scan_succeeded = true;
            }
            Err(error) => {
                stages::record_failure(&self.error_log, &self.progress_reporter, &error)
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Global batch complete: {} cloned, {} clone failure(s), results in {}",
            response.cloned.len(),
            response.failed_clones.len(),
            result_dir.path().display()
        ));

        Ok(response)
    }

    /// Clones one entry into `<workspace>/<name>`; failures are recorded
    async fn clone_into_workspace(&self, entry: &RepoEntry, request: &GlobalBatchRequest) -> bool {
        let destination = request.workspace_dir.join(entry.name().as_str());
        let scope = ErrorScope::Repo(entry.name().clone());

        match stages::clone_into(&self.source_fetcher, &scope, entry.url(), &destination).await {
            Ok(()) => {
                self.progress_reporter
                    .report_success(&format!("Cloned {}", entry.name()));
                true
            }
            Err(error) => {
                stages::record_failure(&self.error_log, &self.progress_reporter, &error);
                false
            }
        }
    }
}
