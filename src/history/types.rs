use serde::{Deserialize, Serialize};

use crate::scoring::Appraisal;

/// An appraisal with its storage identity. The id is assigned on add;
/// the appraisal itself is stored as produced and never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAppraisal {
    pub id: u64,
    #[serde(flatten)]
    pub appraisal: Appraisal,
}

/// The persisted appraisal history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryState {
    pub version: u32,
    pub next_id: u64,
    #[serde(default)]
    pub records: Vec<SavedAppraisal>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryState {
    /// Create a new empty history with version 1.
    pub fn new() -> Self {
        Self {
            version: 1,
            next_id: 1,
            records: Vec::new(),
        }
    }

    /// Append an appraisal and return its assigned id.
    pub fn add(&mut self, appraisal: Appraisal) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(SavedAppraisal { id, appraisal });
        id
    }

    /// Saved appraisals ordered by timestamp, most recent first.
    pub fn ordered(&self) -> Vec<&SavedAppraisal> {
        let mut records: Vec<&SavedAppraisal> = self.records.iter().collect();
        records.sort_by(|a, b| b.appraisal.timestamp.cmp(&a.appraisal.timestamp));
        records
    }

    /// Look up a saved appraisal by id.
    pub fn get(&self, id: u64) -> Option<&SavedAppraisal> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Delete by id. Idempotent: deleting an unknown id is a no-op.
    /// Returns whether a record was actually removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }
}
