use crate::sbom_pipeline::domain::{ErrorScope, Stage};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Per-repository failures never change the exit code; only errors that
/// abort the batch before it starts do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The batch was attempted in full (individual failures are in the error log)
    Success = 0,
    /// Configuration or repository-set error, nothing was processed
    ConfigurationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ConfigurationError => write!(f, "Configuration Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the SBOM pipeline.
///
/// `Config` is fatal and aborts the run before any repository is touched.
/// The stage variants are scoped to one repository (or to the global batch)
/// and are turned into error log records by the batch driver.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid configuration: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    Config {
        path: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Failed to clone {scope}: {cause}")]
    Clone { scope: ErrorScope, cause: String },

    #[error("ORT {step} failed for {scope}: {cause}")]
    Analyze {
        scope: ErrorScope,
        step: Stage,
        cause: String,
    },

    #[error("ScanCode failed for {scope}: {cause}")]
    Scan { scope: ErrorScope, cause: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}

impl PipelineError {
    /// Builds a fatal configuration error for a repository-set or config file.
    pub fn config(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        PipelineError::Config {
            path: path.into(),
            details: details.into(),
            hint: "Expected a JSON array of objects, each with string \"name\" and \"url\" fields"
                .to_string(),
        }
    }

    /// Scope and stage of a per-stage failure, `None` for the other variants
    pub fn stage_context(&self) -> Option<(&ErrorScope, Stage, &str)> {
        match self {
            PipelineError::Clone { scope, cause } => Some((scope, Stage::Clone, cause)),
            PipelineError::Analyze { scope, step, cause } => Some((scope, *step, cause)),
            PipelineError::Scan { scope, cause } => Some((scope, Stage::ScanCode, cause)),
            _ => None,
        }
    }
}
