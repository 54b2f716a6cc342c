pub mod analyzer_result;
pub mod repo_entry;
pub mod repo_state;
pub mod result_directory;
pub mod run_record;

pub use analyzer_result::AnalyzerResult;
pub use repo_entry::{RawRepoEntry, RepoEntry, RepoName};
pub use repo_state::{RepoOutcome, RepoState};
pub use result_directory::{ResultDirectory, GLOBAL_RESULTS_DIR, SUMMARY_FILE};
pub use run_record::{ErrorRecord, ErrorScope, Stage, SummaryRow, SUMMARY_HEADER};
