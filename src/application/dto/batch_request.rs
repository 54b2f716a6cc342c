use crate::sbom_pipeline::domain::RepoEntry;
use std::path::PathBuf;

/// BatchRequest - Internal request DTO for the individual-mode batch
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// Repositories in processing order
    pub repos: Vec<RepoEntry>,
    /// Root under which `<name>/` result directories are created
    pub results_root: PathBuf,
    /// Skip repositories whose three result artifacts already exist
    pub skip_existing: bool,
}

impl BatchRequest {
    pub fn new(repos: Vec<RepoEntry>, results_root: PathBuf, skip_existing: bool) -> Self {
        Self {
            repos,
            results_root,
            skip_existing,
        }
    }
}

/// GlobalBatchRequest - Internal request DTO for the global-mode batch
#[derive(Debug, Clone)]
pub struct GlobalBatchRequest {
    /// Repositories in clone order
    pub repos: Vec<RepoEntry>,
    /// Root under which the `_global` result directory is created
    pub results_root: PathBuf,
    /// Persistent directory holding one checkout per repository
    pub workspace_dir: PathBuf,
}

impl GlobalBatchRequest {
    pub fn new(repos: Vec<RepoEntry>, results_root: PathBuf, workspace_dir: PathBuf) -> Self {
        Self {
            repos,
            results_root,
            workspace_dir,
        }
    }
}
