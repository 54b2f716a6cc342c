use super::FileTree;
use async_trait::async_trait;
use repo_sbom::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DependencyAnalysisTool writing into a FileTree
#[derive(Clone)]
pub struct MockAnalysisTool {
    files: FileTree,
    analyzer_result: String,
    fail_analyze: bool,
    fail_report: bool,
    pub analyzed: Arc<Mutex<Vec<PathBuf>>>,
    pub reported: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockAnalysisTool {
    pub fn new(files: FileTree, analyzer_result: &str) -> Self {
        Self {
            files,
            analyzer_result: analyzer_result.to_string(),
            fail_analyze: false,
            fail_report: false,
            analyzed: Arc::new(Mutex::new(Vec::new())),
            reported: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_analyze(mut self) -> Self {
        self.fail_analyze = true;
        self
    }

    pub fn failing_report(mut self) -> Self {
        self.fail_report = true;
        self
    }

    pub fn invocation_count(&self) -> usize {
        self.analyzed.lock().unwrap().len() + self.reported.lock().unwrap().len()
    }
}

#[async_trait]
impl DependencyAnalysisTool for MockAnalysisTool {
    async fn analyze(&self, _input: &Path, output_dir: &Path) -> Result<()> {
        self.analyzed.lock().unwrap().push(output_dir.to_path_buf());
        if self.fail_analyze {
            anyhow::bail!("Command 'ort analyze' returned non-zero exit status: 2");
        }
        self.files
            .write(output_dir.join("analyzer-result.yml"), self.analyzer_result.clone());
        Ok(())
    }

    async fn report(&self, analyzer_result: &Path, output_dir: &Path) -> Result<()> {
        self.reported.lock().unwrap().push(output_dir.to_path_buf());
        if self.fail_report {
            anyhow::bail!("Command 'ort report' returned non-zero exit status: 1");
        }
        if !self.files.contains(analyzer_result) {
            anyhow::bail!("analyzer result missing");
        }
        self.files.write(output_dir.join("evaluatedModel.json"), "{}");
        Ok(())
    }
}
