use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// DependencyAnalysisTool port for the two-step dependency analysis
///
/// `analyze` writes `analyzer-result.yml` into the output directory and
/// `report` turns that file into the evaluated model next to it.
#[async_trait]
pub trait DependencyAnalysisTool: Send + Sync {
    /// Analyzes the source tree at `input` and writes the analyzer result
    /// into `output_dir`
    async fn analyze(&self, input: &Path, output_dir: &Path) -> Result<()>;

    /// Builds the evaluated model report from `analyzer_result` into
    /// `output_dir`
    async fn report(&self, analyzer_result: &Path, output_dir: &Path) -> Result<()>;
}
