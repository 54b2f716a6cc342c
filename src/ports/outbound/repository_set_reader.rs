use crate::sbom_pipeline::domain::RepoEntry;
use crate::shared::Result;
use std::path::Path;

/// RepositorySetReader port for loading the list of repositories to process
///
/// Implementations must preserve the order of the source document: it is
/// the processing order of the batch.
pub trait RepositorySetReader {
    /// Reads and validates the repository set at `path`
    ///
    /// # Errors
    /// Returns a `PipelineError::Config` if the file is missing, unreadable
    /// or not a sequence of `{name, url}` objects with unique, valid names.
    fn read_repository_set(&self, path: &Path) -> Result<Vec<RepoEntry>>;
}
