//! Configuration file support for repo-sbom.
//!
//! Provides YAML-based configuration through `repo-sbom.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line flags.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::process::DEFAULT_SCANCODE_PROCESSES;
use crate::application::dto::RunMode;
use crate::cli::Args;
use crate::shared::error::PipelineError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "repo-sbom.config.yml";

const DEFAULT_REPOS_FILE: &str = "repos.json";
const DEFAULT_OUTPUT_DIR: &str = "sboms";
const DEFAULT_WORKSPACE_DIR: &str = "workspace";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub repos_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub workspace_dir: Option<PathBuf>,
    pub skip_existing: Option<bool>,
    pub git_cli: Option<String>,
    pub ort_cli: Option<String>,
    pub scancode_cli: Option<String>,
    pub scancode_processes: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

fn config_error(path: &Path, details: impl Into<String>, hint: &str) -> PipelineError {
    PipelineError::Config {
        path: path.to_path_buf(),
        details: details.into(),
        hint: hint.to_string(),
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        config_error(
            path,
            format!("Failed to read config file: {}", e),
            "Check that the file exists and is readable.",
        )
    })?;

    // An empty file is a valid config with every field unset
    let config: ConfigFile = serde_yaml_ng::from_str::<Option<ConfigFile>>(&content)
        .map_err(|e| {
            config_error(
                path,
                format!("Failed to parse config file: {}", e),
                "Ensure the file contains valid YAML syntax.",
            )
        })?
        .unwrap_or_default();

    validate_config(path, &config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(path: &Path, config: &ConfigFile) -> Result<()> {
    if config.scancode_processes == Some(0) {
        return Err(config_error(
            path,
            "scancode_processes must be at least 1",
            "Remove the field to use the default of 6 processes.",
        )
        .into());
    }

    let tools = [
        ("git_cli", &config.git_cli),
        ("ort_cli", &config.ort_cli),
        ("scancode_cli", &config.scancode_cli),
    ];
    for (field, value) in tools {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(config_error(
                path,
                format!("{} must not be empty", field),
                "Give a program name on PATH or an absolute path to the executable.",
            )
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective run settings after merging CLI flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: RunMode,
    pub repos_file: PathBuf,
    pub output_dir: PathBuf,
    pub workspace_dir: PathBuf,
    pub skip_existing: bool,
    pub git_cli: String,
    pub ort_cli: String,
    pub scancode_cli: String,
    pub scancode_processes: u32,
}

impl Settings {
    /// CLI flag wins over the config file, which wins over the built-in default.
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();

        Self {
            mode: args.mode,
            repos_file: args
                .repos
                .clone()
                .or(config.repos_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPOS_FILE)),
            output_dir: args
                .output_dir
                .clone()
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            workspace_dir: args
                .workspace
                .clone()
                .or(config.workspace_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKSPACE_DIR)),
            skip_existing: args.skip_existing || config.skip_existing.unwrap_or(false),
            git_cli: config.git_cli.unwrap_or_else(|| "git".to_string()),
            ort_cli: config.ort_cli.unwrap_or_else(|| "ort".to_string()),
            scancode_cli: config.scancode_cli.unwrap_or_else(|| "scancode".to_string()),
            scancode_processes: config
                .scancode_processes
                .unwrap_or(DEFAULT_SCANCODE_PROCESSES),
        }
    }
}
