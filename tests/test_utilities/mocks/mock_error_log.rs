use repo_sbom::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ErrorLog keeping rendered lines in memory
#[derive(Default, Clone)]
pub struct MockErrorLog {
    pub lines: Arc<Mutex<Vec<String>>>,
    pub resets: Arc<Mutex<usize>>,
    /// Every append fails, to exercise the unwritable-log path
    pub broken: bool,
}

impl MockErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn get_lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ErrorLog for MockErrorLog {
    fn reset(&self) -> Result<()> {
        *self.resets.lock().unwrap() += 1;
        self.lines.lock().unwrap().clear();
        Ok(())
    }

    fn append(&self, record: &ErrorRecord) -> Result<()> {
        if self.broken {
            anyhow::bail!("disk full");
        }
        self.lines.lock().unwrap().push(record.to_log_line());
        Ok(())
    }
}
