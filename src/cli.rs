use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::RunMode;

/// Generate SBOMs and license scans for a list of git repositories
#[derive(Parser, Debug)]
#[command(name = "repo-sbom")]
#[command(version = "0.1.0")]
#[command(
    about = "Generate SBOMs and license scans for a list of git repositories",
    long_about = None
)]
pub struct Args {
    /// Run mode: individual (one SBOM per repository) or global (one combined SBOM)
    #[arg(short, long, default_value = "individual")]
    pub mode: RunMode,

    /// Repository set file: a JSON array of {"name", "url"} objects [default: repos.json]
    #[arg(short, long, value_name = "FILE")]
    pub repos: Option<PathBuf>,

    /// Root directory for result directories and summary.csv [default: sboms]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Persistent checkout directory used by global mode [default: workspace]
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Skip repositories whose results are already complete (individual mode only)
    #[arg(long)]
    pub skip_existing: bool,

    /// Path to a config file (defaults to ./repo-sbom.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
