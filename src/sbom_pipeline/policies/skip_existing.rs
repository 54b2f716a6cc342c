/// SkipExisting policy for incremental re-runs
///
/// A repository is skipped only when skipping was requested and every
/// artifact of its result directory is already present. A partial result
/// directory (e.g. the scan failed last time) is processed again.
pub struct SkipExistingPolicy;

impl SkipExistingPolicy {
    /// Decides whether a repository can be skipped
    ///
    /// # Arguments
    /// * `skip_existing` - Whether `--skip-existing` is in effect
    /// * `artifacts_present` - Presence of each result artifact
    pub fn should_skip(skip_existing: bool, artifacts_present: &[bool]) -> bool {
        skip_existing && !artifacts_present.is_empty() && artifacts_present.iter().all(|p| *p)
    }
}
