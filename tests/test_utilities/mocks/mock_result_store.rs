use repo_sbom::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the files written by the external tools
#[derive(Default, Clone)]
pub struct FileTree {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// Mock ResultStore backed by a FileTree
#[derive(Clone)]
pub struct MockResultStore {
    files: FileTree,
    pub prepared: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockResultStore {
    pub fn new(files: FileTree) -> Self {
        Self {
            files,
            prepared: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn was_prepared(&self, path: &Path) -> bool {
        self.prepared.lock().unwrap().contains(path)
    }
}

impl ResultStore for MockResultStore {
    fn prepare_directory(&self, path: &Path) -> Result<()> {
        self.prepared.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn artifact_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn read_analyzer_result(&self, path: &Path) -> Result<String> {
        self.files
            .read(path)
            .ok_or_else(|| anyhow::anyhow!("no analyzer result at {}", path.display()))
    }
}
