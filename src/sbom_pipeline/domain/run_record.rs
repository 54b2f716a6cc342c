use super::RepoName;
use crate::shared::error::PipelineError;
use std::fmt;

/// Header line of `summary.csv`
pub const SUMMARY_HEADER: &str = "project,dependency_count";

/// Pipeline stage a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Clone,
    Analyze,
    Report,
    ScanCode,
}

impl Stage {
    /// Name of the external tool behind the stage, used for global log lines
    pub fn tool(&self) -> &'static str {
        match self {
            Stage::Clone => "Git",
            Stage::Analyze | Stage::Report => "ORT",
            Stage::ScanCode => "ScanCode",
        }
    }

    /// Whether a failure in this stage prevents the summary row.
    ///
    /// The dependency count only needs the analyzer result, so a ScanCode
    /// failure is recorded but the repository still reaches the summary.
    pub fn blocks_summary(&self) -> bool {
        !matches!(self, Stage::ScanCode)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Clone => "Clone",
            Stage::Analyze => "Analyze",
            Stage::Report => "Report",
            Stage::ScanCode => "ScanCode",
        };
        write!(f, "{}", label)
    }
}

/// What a failure is scoped to: a single repository or the whole global run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorScope {
    Repo(RepoName),
    Global,
}

impl fmt::Display for ErrorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorScope::Repo(name) => write!(f, "{}", name),
            ErrorScope::Global => write!(f, "Global"),
        }
    }
}

/// One row of the dependency summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub project: RepoName,
    pub dependency_count: usize,
}

impl SummaryRow {
    pub fn new(project: RepoName, dependency_count: usize) -> Self {
        Self {
            project,
            dependency_count,
        }
    }

    /// Renders the row as one CSV line (without the trailing newline)
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{}",
            escape_csv_field(self.project.as_str()),
            self.dependency_count
        )
    }
}

/// Quotes a field when it contains a delimiter, quote or line break
fn escape_csv_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// One operator-facing error log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub scope: ErrorScope,
    pub stage: Stage,
    pub message: String,
}

impl ErrorRecord {
    pub fn new(scope: ErrorScope, stage: Stage, message: impl Into<String>) -> Self {
        Self {
            scope,
            stage,
            message: message.into(),
        }
    }

    /// Builds a record from a stage failure; other error kinds yield `None`
    pub fn from_error(error: &PipelineError) -> Option<Self> {
        error
            .stage_context()
            .map(|(scope, stage, cause)| Self::new(scope.clone(), stage, cause))
    }

    /// Renders the log line (without the trailing newline).
    ///
    /// Repository failures read `[<name>] <Stage> error: <cause>`; batch-wide
    /// failures read `[<Tool> Global] Error: <cause>`.
    pub fn to_log_line(&self) -> String {
        let message = self.message.replace(|c: char| c == '\n' || c == '\r', " ");
        match &self.scope {
            ErrorScope::Repo(name) => format!("[{}] {} error: {}", name, self.stage, message),
            ErrorScope::Global => format!("[{} Global] Error: {}", self.stage.tool(), message),
        }
    }
}
