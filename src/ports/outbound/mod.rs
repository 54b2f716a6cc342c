/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, child processes, console).
pub mod dependency_analysis_tool;
pub mod license_scanner;
pub mod progress_reporter;
pub mod repository_set_reader;
pub mod result_store;
pub mod source_fetcher;

pub use dependency_analysis_tool::DependencyAnalysisTool;
pub use license_scanner::LicenseScanner;
pub use progress_reporter::ProgressReporter;
pub use repository_set_reader::RepositorySetReader;
pub use result_store::{ErrorLog, ResultStore, SummaryStore};
pub use source_fetcher::SourceFetcher;
