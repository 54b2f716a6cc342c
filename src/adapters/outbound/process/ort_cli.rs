use super::command_runner::ToolInvocation;
use crate::ports::outbound::DependencyAnalysisTool;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// Report format requested from `ort report`
const REPORT_FORMAT: &str = "EvaluatedModel";

/// OrtCli adapter driving the OSS Review Toolkit command line
pub struct OrtCli {
    ort_cli: String,
}

impl OrtCli {
    pub fn new(ort_cli: impl Into<String>) -> Self {
        Self {
            ort_cli: ort_cli.into(),
        }
    }

    fn analyze_invocation(&self, input: &Path, output_dir: &Path) -> ToolInvocation {
        ToolInvocation::new(&self.ort_cli)
            .arg("analyze")
            .arg("-i")
            .arg(input)
            .arg("-o")
            .arg(output_dir)
    }

    fn report_invocation(&self, analyzer_result: &Path, output_dir: &Path) -> ToolInvocation {
        ToolInvocation::new(&self.ort_cli)
            .arg("report")
            .arg("-i")
            .arg(analyzer_result)
            .arg("-o")
            .arg(output_dir)
            .arg("-f")
            .arg(REPORT_FORMAT)
    }
}

impl Default for OrtCli {
    fn default() -> Self {
        Self::new("ort")
    }
}

#[async_trait]
impl DependencyAnalysisTool for OrtCli {
    async fn analyze(&self, input: &Path, output_dir: &Path) -> Result<()> {
        self.analyze_invocation(input, output_dir).run().await
    }

    async fn report(&self, analyzer_result: &Path, output_dir: &Path) -> Result<()> {
        self.report_invocation(analyzer_result, output_dir)
            .run()
            .await
    }
}
