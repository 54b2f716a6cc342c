use super::{RepoName, Stage};

/// Processing state of one repository in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
    Pending,
    Cloning,
    Analyzing,
    Scanning,
    Done,
    Failed(Stage),
}

impl RepoState {
    /// Next state on success of the current stage.
    ///
    /// Terminal states map to themselves.
    pub fn advance(self) -> Self {
        match self {
            RepoState::Pending => RepoState::Cloning,
            RepoState::Cloning => RepoState::Analyzing,
            RepoState::Analyzing => RepoState::Scanning,
            RepoState::Scanning => RepoState::Done,
            terminal => terminal,
        }
    }

    /// State after a failure in `stage`
    pub fn fail(self, stage: Stage) -> Self {
        RepoState::Failed(stage)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RepoState::Done | RepoState::Failed(_))
    }
}

/// Final result for one repository of an individual-mode batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoOutcome {
    pub name: RepoName,
    pub state: RepoState,
    /// Present when a summary row was written
    pub dependency_count: Option<usize>,
    /// Results were already present and `--skip-existing` was set
    pub skipped: bool,
    pub scan_failed: bool,
}

impl RepoOutcome {
    pub fn new(name: RepoName) -> Self {
        Self {
            name,
            state: RepoState::Pending,
            dependency_count: None,
            skipped: false,
            scan_failed: false,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, RepoState::Failed(_))
    }
}
