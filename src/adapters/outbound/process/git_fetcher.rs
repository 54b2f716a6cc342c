use super::command_runner::ToolInvocation;
use crate::ports::outbound::SourceFetcher;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// GitFetcher adapter performing shallow clones with the git CLI
pub struct GitFetcher {
    git_cli: String,
}

impl GitFetcher {
    pub fn new(git_cli: impl Into<String>) -> Self {
        Self {
            git_cli: git_cli.into(),
        }
    }

    /// Security: a url starting with '-' would be parsed by git as an option
    fn validate_url(url: &str) -> Result<()> {
        if url.starts_with('-') {
            anyhow::bail!("Security: repository url '{}' looks like a command-line option", url);
        }
        Ok(())
    }

    fn clone_invocation(&self, url: &str, destination: &Path) -> ToolInvocation {
        ToolInvocation::new(&self.git_cli)
            .arg("clone")
            .arg("--depth=1")
            .arg(url)
            .arg(destination)
    }
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::new("git")
    }
}

#[async_trait]
impl SourceFetcher for GitFetcher {
    async fn fetch(&self, url: &str, destination: &Path) -> Result<()> {
        Self::validate_url(url)?;
        self.clone_invocation(url, destination).run().await
    }
}
