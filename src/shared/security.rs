use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for user-supplied input files such as the
/// repository set (100 MB).
///
/// Artifacts written by the external tools are not bounded by this; an
/// analyzer result for a large monorepo can exceed it.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects `path` if it exists and is a symbolic link.
///
/// A missing path is accepted: log and summary files are created on first
/// append.
///
/// # Arguments
/// * `path` - The path about to be written
/// * `operation` - Description of the operation (e.g., "append") for error messages
pub fn validate_write_target(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => anyhow::bail!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        ),
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    if metadata.is_dir() {
        anyhow::bail!("{} is a directory, expected a file", path.display());
    }

    Ok(())
}

/// Reads a regular, non-symlink input file of bounded size into a string.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Description of the file (e.g., "repository set") for error messages
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link or not a regular file
/// - The file is larger than [`MAX_FILE_SIZE`]
/// - The content is not valid UTF-8
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    read_checked(path, file_description, Some(MAX_FILE_SIZE))
}

/// Reads an artifact produced by one of the external tools.
///
/// Same symlink and regular-file checks as [`read_regular_file`], without
/// the size limit.
pub fn read_tool_artifact(path: &Path, file_description: &str) -> Result<String> {
    read_checked(path, file_description, None)
}

fn read_checked(path: &Path, file_description: &str, max_size: Option<u64>) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if let Some(limit) = max_size {
        if metadata.len() > limit {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                metadata.len(),
                limit
            );
        }
    }

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_write_target_missing_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("error_log.txt");
        assert!(validate_write_target(&path, "append").is_ok());
    }

    #[test]
    fn test_validate_write_target_regular_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("summary.csv");
        fs::write(&path, "project,dependency_count\n").unwrap();
        assert!(validate_write_target(&path, "append").is_ok());
    }

    #[test]
    fn test_validate_write_target_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_write_target(temp_dir.path(), "append");
        assert!(result.unwrap_err().to_string().contains("is a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_write_target_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.txt");
        fs::write(&target, "").unwrap();
        let link = temp_dir.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_write_target(&link, "append");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repos.json");
        fs::write(&path, "[]").unwrap();

        assert_eq!(read_regular_file(&path, "repository set").unwrap(), "[]");
    }

    #[test]
    fn test_read_regular_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/repos.json");
        let result = read_regular_file(&path, "repository set");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read repository set metadata"));
    }

    #[test]
    fn test_read_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_regular_file(temp_dir.path(), "repository set");
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_regular_file_rejects_oversized_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repos.json");
        let file = fs::File::create(&path).unwrap();
        file.set_len(MAX_FILE_SIZE + 1).unwrap();

        let result = read_regular_file(&path, "repository set");
        assert!(result.unwrap_err().to_string().contains("is too large"));
    }

    #[test]
    fn test_read_tool_artifact_has_no_size_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("analyzer-result.yml");
        let file = fs::File::create(&path).unwrap();
        file.set_len(MAX_FILE_SIZE + 1).unwrap();

        // Zero padding is valid UTF-8, so the whole file comes back
        let content = read_tool_artifact(&path, "analyzer result").unwrap();
        assert_eq!(content.len() as u64, MAX_FILE_SIZE + 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_tool_artifact_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.yml");
        fs::write(&target, "projects: []").unwrap();
        let link = temp_dir.path().join("analyzer-result.yml");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = read_tool_artifact(&link, "analyzer result");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_max_file_size_constant() {
        assert_eq!(MAX_FILE_SIZE, 100 * 1024 * 1024);
    }
}
