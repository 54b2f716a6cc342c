use super::command_runner::ToolInvocation;
use crate::ports::outbound::LicenseScanner;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// Worker processes ScanCode uses internally unless configured otherwise
pub const DEFAULT_SCANCODE_PROCESSES: u32 = 6;

/// ScanCodeCli adapter driving scancode-toolkit
///
/// Extracts copyrights, emails, file info, licenses, package metadata and
/// urls into a pretty-printed JSON report.
pub struct ScanCodeCli {
    scancode_cli: String,
    processes: u32,
}

impl ScanCodeCli {
    pub fn new(scancode_cli: impl Into<String>, processes: u32) -> Self {
        Self {
            scancode_cli: scancode_cli.into(),
            processes,
        }
    }

    fn scan_invocation(&self, input: &Path, report_path: &Path) -> ToolInvocation {
        ToolInvocation::new(&self.scancode_cli)
            .arg(input)
            .arg("--copyright")
            .arg("--email")
            .arg("--info")
            .arg("--json-pp")
            .arg(report_path)
            .arg("--license")
            .arg("--package")
            .arg("--processes")
            .arg(self.processes.to_string())
            .arg("--url")
    }
}

impl Default for ScanCodeCli {
    fn default() -> Self {
        Self::new("scancode", DEFAULT_SCANCODE_PROCESSES)
    }
}

#[async_trait]
impl LicenseScanner for ScanCodeCli {
    async fn scan(&self, input: &Path, report_path: &Path) -> Result<()> {
        self.scan_invocation(input, report_path).run().await
    }
}
