use super::RepoName;
use std::path::{Path, PathBuf};

/// File written by `ort analyze`
pub const ANALYZER_RESULT_FILE: &str = "analyzer-result.yml";
/// File written by `ort report -f EvaluatedModel`
pub const EVALUATED_MODEL_FILE: &str = "evaluatedModel.json";
/// File written by `scancode --json-pp`
pub const SCAN_REPORT_FILE: &str = "scancode_results.json";
/// Directory name used for the combined results of a global run
pub const GLOBAL_RESULTS_DIR: &str = "_global";
/// Summary table written directly under the results root
pub const SUMMARY_FILE: &str = "summary.csv";

/// Output location owning the three artifacts of one repository (or of
/// the global run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDirectory {
    path: PathBuf,
}

impl ResultDirectory {
    /// `<results_root>/<name>`
    pub fn for_repo(results_root: &Path, name: &RepoName) -> Self {
        Self {
            path: results_root.join(name.as_str()),
        }
    }

    /// `<results_root>/_global`
    pub fn global(results_root: &Path) -> Self {
        Self {
            path: results_root.join(GLOBAL_RESULTS_DIR),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn analyzer_result(&self) -> PathBuf {
        self.path.join(ANALYZER_RESULT_FILE)
    }

    pub fn evaluated_model(&self) -> PathBuf {
        self.path.join(EVALUATED_MODEL_FILE)
    }

    pub fn scan_report(&self) -> PathBuf {
        self.path.join(SCAN_REPORT_FILE)
    }

    /// All artifact paths, in the order the tools produce them
    pub fn artifacts(&self) -> [PathBuf; 3] {
        [
            self.analyzer_result(),
            self.evaluated_model(),
            self.scan_report(),
        ]
    }
}
