use super::FileTree;
use async_trait::async_trait;
use repo_sbom::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock LicenseScanner writing its report into a FileTree
#[derive(Clone)]
pub struct MockLicenseScanner {
    files: FileTree,
    fail: bool,
    pub scanned: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockLicenseScanner {
    pub fn new(files: FileTree) -> Self {
        Self {
            files,
            fail: false,
            scanned: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn invocation_count(&self) -> usize {
        self.scanned.lock().unwrap().len()
    }
}

#[async_trait]
impl LicenseScanner for MockLicenseScanner {
    async fn scan(&self, input: &Path, report_path: &Path) -> Result<()> {
        self.scanned.lock().unwrap().push(input.to_path_buf());
        if self.fail {
            anyhow::bail!("Command 'scancode' returned non-zero exit status: 1");
        }
        self.files.write(report_path, "{\"files\": []}");
        Ok(())
    }
}
