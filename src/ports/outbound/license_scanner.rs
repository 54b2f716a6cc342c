use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// LicenseScanner port for copyright/license scanning
#[async_trait]
pub trait LicenseScanner: Send + Sync {
    /// Scans the source tree at `input` and writes a JSON report to
    /// `report_path`
    async fn scan(&self, input: &Path, report_path: &Path) -> Result<()>;
}
