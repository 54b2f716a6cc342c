//! repo-sbom - batch SBOM generation for lists of git repositories
//!
//! This library drives ORT (dependency analysis) and ScanCode (license
//! scanning) over every repository of a repository set, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_pipeline`): Repository entries, run records, dependency counting
//! - **Application Layer** (`application`): Individual and global batch use cases
//! - **Ports** (`ports`): Interface definitions for tools, stores and the console
//! - **Adapters** (`adapters`): Child-process, filesystem and console implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use repo_sbom::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let repos = FileSystemReader::new().read_repository_set(Path::new("repos.json"))?;
//!
//! let use_case = RunIndividualBatchUseCase::new(
//!     GitFetcher::default(),
//!     OrtCli::default(),
//!     ScanCodeCli::default(),
//!     FileSystemResultStore::new(),
//!     CsvSummaryWriter::new(PathBuf::from("sboms/summary.csv")),
//!     FileErrorLog::new(PathBuf::from("error_log.txt")),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = BatchRequest::new(repos, PathBuf::from("sboms"), false);
//! let response = use_case.execute(request).await?;
//! println!("{} repositories failed", response.failed_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_pipeline;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvSummaryWriter, FileErrorLog, FileSystemReader, FileSystemResultStore,
    };
    pub use crate::adapters::outbound::process::{GitFetcher, OrtCli, ScanCodeCli};
    pub use crate::application::dto::{
        BatchRequest, BatchResponse, GlobalBatchRequest, GlobalBatchResponse, RunMode,
    };
    pub use crate::application::use_cases::{RunGlobalBatchUseCase, RunIndividualBatchUseCase};
    pub use crate::ports::outbound::{
        DependencyAnalysisTool, ErrorLog, LicenseScanner, ProgressReporter, RepositorySetReader,
        ResultStore, SourceFetcher, SummaryStore,
    };
    pub use crate::sbom_pipeline::domain::{
        ErrorRecord, ErrorScope, RepoEntry, RepoName, RepoOutcome, RepoState, ResultDirectory,
        Stage, SummaryRow,
    };
    pub use crate::sbom_pipeline::policies::SkipExistingPolicy;
    pub use crate::sbom_pipeline::services::DependencyCounter;
    pub use crate::shared::error::PipelineError;
    pub use crate::shared::Result;
}
