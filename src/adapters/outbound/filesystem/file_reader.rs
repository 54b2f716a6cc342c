use crate::ports::outbound::RepositorySetReader;
use crate::sbom_pipeline::domain::{RawRepoEntry, RepoEntry};
use crate::shared::error::PipelineError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::collections::HashSet;
use std::path::Path;

/// FileSystemReader adapter for reading pipeline inputs from the file system
///
/// This adapter implements the RepositorySetReader port. The file goes
/// through the shared safe-read checks (no symlinks, regular files only,
/// bounded size) before it is parsed.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Validates raw entries into RepoEntry values, keeping document order
    fn validate_entries(path: &Path, raw_entries: Vec<RawRepoEntry>) -> Result<Vec<RepoEntry>> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(raw_entries.len());

        for (index, raw) in raw_entries.into_iter().enumerate() {
            let entry = RepoEntry::new(raw.name, raw.url).map_err(|e| {
                PipelineError::config(path, format!("entry {}: {}", index, e))
            })?;

            if !seen.insert(entry.name().clone()) {
                return Err(PipelineError::config(
                    path,
                    format!(
                        "entry {}: duplicate repository name '{}'",
                        index,
                        entry.name()
                    ),
                )
                .into());
            }

            entries.push(entry);
        }

        Ok(entries)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositorySetReader for FileSystemReader {
    fn read_repository_set(&self, path: &Path) -> Result<Vec<RepoEntry>> {
        if !path.exists() {
            return Err(PipelineError::config(path, "Repository set file does not exist").into());
        }

        let content = read_regular_file(path, "repository set")
            .map_err(|e| PipelineError::config(path, e.to_string()))?;

        let raw_entries: Vec<RawRepoEntry> = serde_json::from_str(&content)
            .map_err(|e| PipelineError::config(path, format!("Malformed repository set: {}", e)))?;

        Self::validate_entries(path, raw_entries)
    }
}
