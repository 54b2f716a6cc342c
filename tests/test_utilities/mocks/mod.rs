/// Mock implementations for testing
mod mock_analysis_tool;
mod mock_error_log;
mod mock_license_scanner;
mod mock_progress_reporter;
mod mock_result_store;
mod mock_source_fetcher;
mod mock_summary_store;

pub use mock_analysis_tool::MockAnalysisTool;
pub use mock_error_log::MockErrorLog;
pub use mock_license_scanner::MockLicenseScanner;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_result_store::{FileTree, MockResultStore};
pub use mock_source_fetcher::MockSourceFetcher;
pub use mock_summary_store::MockSummaryStore;
