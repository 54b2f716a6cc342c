use crate::sbom_pipeline::domain::{RepoName, RepoOutcome, RepoState};

/// BatchResponse - Per-repository outcomes of an individual-mode batch
#[derive(Debug, Clone)]
pub struct BatchResponse {
    /// One outcome per repository, in processing order
    pub outcomes: Vec<RepoOutcome>,
}

impl BatchResponse {
    pub fn new(outcomes: Vec<RepoOutcome>) -> Self {
        Self { outcomes }
    }

    /// Repositories that got a summary row in this run
    pub fn summarized_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.dependency_count.is_some())
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.skipped).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    pub fn scan_failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.scan_failed).count()
    }

    /// Outcome for a repository by name
    pub fn outcome(&self, name: &str) -> Option<&RepoOutcome> {
        self.outcomes.iter().find(|o| o.name.as_str() == name)
    }

    /// Whether every repository reached `Done`
    pub fn all_done(&self) -> bool {
        self.outcomes.iter().all(|o| o.state == RepoState::Done)
    }
}

/// GlobalBatchResponse - Result of a global-mode batch
#[derive(Debug, Clone, Default)]
pub struct GlobalBatchResponse {
    /// Repositories cloned into the workspace during this run
    pub cloned: Vec<RepoName>,
    /// Repositories whose clone failed
    pub failed_clones: Vec<RepoName>,
    pub analysis_succeeded: bool,
    pub scan_succeeded: bool,
    /// Distinct dependencies over the whole workspace, when the analysis succeeded
    pub dependency_count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_pipeline::domain::Stage;

    fn outcome(name: &str, state: RepoState) -> RepoOutcome {
        let mut outcome = RepoOutcome::new(RepoName::new(name.to_string()).unwrap());
        outcome.state = state;
        outcome
    }

    #[test]
    fn test_counts() {
        let mut done = outcome("a", RepoState::Done);
        done.dependency_count = Some(4);
        done.scan_failed = true;
        let mut skipped = outcome("b", RepoState::Done);
        skipped.skipped = true;
        let failed = outcome("c", RepoState::Failed(Stage::Clone));

        let response = BatchResponse::new(vec![done, skipped, failed]);
        assert_eq!(response.summarized_count(), 1);
        assert_eq!(response.skipped_count(), 1);
        assert_eq!(response.failed_count(), 1);
        assert_eq!(response.scan_failed_count(), 1);
        assert!(!response.all_done());
        assert_eq!(
            response.outcome("c").unwrap().state,
            RepoState::Failed(Stage::Clone)
        );
        assert!(response.outcome("zzz").is_none());
    }

    #[test]
    fn test_empty_batch_is_all_done() {
        assert!(BatchResponse::new(vec![]).all_done());
    }
}
