use async_trait::async_trait;
use repo_sbom::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock SourceFetcher that records every clone attempt
///
/// Nothing is written to disk; urls registered with `failing_on` fail with
/// a git-like message.
#[derive(Default, Clone)]
pub struct MockSourceFetcher {
    failing: HashSet<String>,
    pub attempts: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl MockSourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn attempted_urls(&self) -> Vec<String> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn destinations(&self) -> Vec<PathBuf> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, destination)| destination.clone())
            .collect()
    }
}

#[async_trait]
impl SourceFetcher for MockSourceFetcher {
    async fn fetch(&self, url: &str, destination: &Path) -> Result<()> {
        self.attempts
            .lock()
            .unwrap()
            .push((url.to_string(), destination.to_path_buf()));

        if self.failing.contains(url) {
            anyhow::bail!("fatal: could not read Username for '{}'", url);
        }
        Ok(())
    }
}
