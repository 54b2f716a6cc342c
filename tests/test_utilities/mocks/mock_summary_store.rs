use repo_sbom::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock SummaryStore keeping the table in memory
#[derive(Default, Clone)]
pub struct MockSummaryStore {
    pub has_header: Arc<Mutex<bool>>,
    pub rows: Arc<Mutex<Vec<SummaryRow>>>,
}

impl MockSummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn csv_lines(&self) -> Vec<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|row| row.to_csv_line())
            .collect()
    }
}

impl SummaryStore for MockSummaryStore {
    fn ensure_header(&self) -> Result<()> {
        *self.has_header.lock().unwrap() = true;
        Ok(())
    }

    fn append_row(&self, row: &SummaryRow) -> Result<()> {
        self.rows.lock().unwrap().push(row.clone());
        Ok(())
    }
}
