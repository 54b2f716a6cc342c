use crate::sbom_pipeline::domain::AnalyzerResult;
use std::collections::HashSet;

/// DependencyCounter service for summarizing analyzer results
///
/// Pure logic over the analyzer result text; reading the file is left to
/// the `AnalyzerResultReader` port.
pub struct DependencyCounter;

impl DependencyCounter {
    /// Counts distinct dependency ids across every project and scope.
    ///
    /// Counting is best effort: unparseable or empty documents count as `0`
    /// so that a bad analyzer result never blocks the summary.
    ///
    /// # Arguments
    /// * `content` - Raw YAML of an `analyzer-result.yml`
    pub fn count(content: &str) -> usize {
        match serde_yaml_ng::from_str::<Option<AnalyzerResult>>(content) {
            Ok(Some(result)) => Self::count_result(&result),
            Ok(None) | Err(_) => 0,
        }
    }

    /// Counts distinct dependency ids of an already parsed result
    pub fn count_result(result: &AnalyzerResult) -> usize {
        result.dependency_ids().collect::<HashSet<_>>().len()
    }
}
