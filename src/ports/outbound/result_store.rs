use crate::sbom_pipeline::domain::{ErrorRecord, SummaryRow};
use crate::shared::Result;
use std::path::Path;

/// ResultStore port for the directories that receive tool output
///
/// Artifacts are written by the external tools themselves; the store only
/// creates directories, checks for artifacts and reads the analyzer result back.
pub trait ResultStore {
    /// Creates `path` (and its parents) if missing; existing directories are reused
    fn prepare_directory(&self, path: &Path) -> Result<()>;

    /// Whether an artifact file exists at `path`
    fn artifact_exists(&self, path: &Path) -> bool;

    /// Returns the raw content of the `analyzer-result.yml` at `path`
    fn read_analyzer_result(&self, path: &Path) -> Result<String>;
}

/// SummaryStore port for the append-only dependency summary table
pub trait SummaryStore {
    /// Writes the header if the summary does not exist yet; never rewrites it
    fn ensure_header(&self) -> Result<()>;

    /// Appends one row; rows are never deduplicated
    fn append_row(&self, row: &SummaryRow) -> Result<()>;
}

/// ErrorLog port for the operator-facing failure log
pub trait ErrorLog {
    /// Truncates the log; called once at the start of a batch
    fn reset(&self) -> Result<()>;

    /// Appends one record as a single line
    fn append(&self, record: &ErrorRecord) -> Result<()>;
}
