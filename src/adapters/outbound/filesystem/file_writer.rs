use crate::ports::outbound::{ErrorLog, ResultStore, SummaryStore};
use crate::sbom_pipeline::domain::{ErrorRecord, SummaryRow, SUMMARY_HEADER};
use crate::shared::error::PipelineError;
use crate::shared::security::{read_tool_artifact, validate_write_target};
use crate::shared::Result;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends one line to `path`, opening and closing the file for this write only
fn append_line(path: &Path, line: &str) -> Result<()> {
    validate_write_target(path, "append").map_err(|e| PipelineError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PipelineError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    writeln!(file, "{}", line).map_err(|e| PipelineError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    Ok(())
}

/// FileSystemResultStore adapter for tool output directories
pub struct FileSystemResultStore;

impl FileSystemResultStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore for FileSystemResultStore {
    fn prepare_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| {
            PipelineError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Failed to create directory: {}", e),
            }
            .into()
        })
    }

    fn artifact_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_analyzer_result(&self, path: &Path) -> Result<String> {
        read_tool_artifact(path, "analyzer result").map_err(|e| {
            PipelineError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// CsvSummaryWriter adapter for the `summary.csv` table
///
/// The file outlives a single run: the header is written once, rows are
/// appended forever.
pub struct CsvSummaryWriter {
    summary_path: PathBuf,
}

impl CsvSummaryWriter {
    pub fn new(summary_path: PathBuf) -> Self {
        Self { summary_path }
    }

    pub fn path(&self) -> &Path {
        &self.summary_path
    }
}

impl SummaryStore for CsvSummaryWriter {
    fn ensure_header(&self) -> Result<()> {
        if self.summary_path.exists() {
            return Ok(());
        }
        append_line(&self.summary_path, SUMMARY_HEADER)
    }

    fn append_row(&self, row: &SummaryRow) -> Result<()> {
        append_line(&self.summary_path, &row.to_csv_line())
    }
}

/// FileErrorLog adapter for the plain-text error log
pub struct FileErrorLog {
    log_path: PathBuf,
}

impl FileErrorLog {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

impl ErrorLog for FileErrorLog {
    fn reset(&self) -> Result<()> {
        validate_write_target(&self.log_path, "truncate").map_err(|e| {
            PipelineError::FileWriteError {
                path: self.log_path.clone(),
                details: e.to_string(),
            }
        })?;

        File::create(&self.log_path).map_err(|e| PipelineError::FileWriteError {
            path: self.log_path.clone(),
            details: format!("Failed to truncate error log: {}", e),
        })?;

        Ok(())
    }

    fn append(&self, record: &ErrorRecord) -> Result<()> {
        append_line(&self.log_path, &record.to_log_line())
    }
}
