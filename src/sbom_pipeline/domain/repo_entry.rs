use super::result_directory::{GLOBAL_RESULTS_DIR, SUMMARY_FILE};
use crate::shared::Result;
use serde::Deserialize;

/// Maximum length for repository names (most filesystems cap a path component at 255 bytes)
const MAX_REPO_NAME_LENGTH: usize = 255;

/// Entries under the results root that belong to the batch itself
const RESERVED_NAMES: &[&str] = &[GLOBAL_RESULTS_DIR, SUMMARY_FILE];

/// NewType wrapper for a repository name.
///
/// The name doubles as a directory name under the results root and the
/// global workspace, so it must be a single safe path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(String);

impl RepoName {
    pub fn new(name: String) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("Repository name cannot be empty");
        }

        if name.len() > MAX_REPO_NAME_LENGTH {
            anyhow::bail!(
                "Repository name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_REPO_NAME_LENGTH
            );
        }

        if name == "." || name == ".." {
            anyhow::bail!("Repository name '{}' is not a valid directory name", name);
        }

        // Compared case-insensitively for case-folding filesystems
        if RESERVED_NAMES
            .iter()
            .any(|reserved| name.eq_ignore_ascii_case(reserved))
        {
            anyhow::bail!(
                "Repository name '{}' is reserved for the batch outputs under the results directory",
                name
            );
        }

        // Security: a name is joined onto output paths, so no separators or NUL
        if name.chars().any(|c| c == '/' || c == '\\' || c == '\0') {
            anyhow::bail!(
                "Repository name '{}' contains path separators or NUL characters",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepoName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One repository to process: a name and the URL it is cloned from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    name: RepoName,
    url: String,
}

impl RepoEntry {
    pub fn new(name: String, url: String) -> Result<Self> {
        let name = RepoName::new(name)?;
        if url.trim().is_empty() {
            anyhow::bail!("Repository '{}' has an empty url", name);
        }
        Ok(Self { name, url })
    }

    pub fn name(&self) -> &RepoName {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Raw shape of one element in the repository-set document
#[derive(Debug, Deserialize)]
pub struct RawRepoEntry {
    pub name: String,
    pub url: String,
}
