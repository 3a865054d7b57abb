//! Latest-wins record cell: keeps the freshest applied server response.

use crate::models::record::AttendanceRecord;
use std::sync::{Mutex, PoisonError};

/// Holds the most recently applied `(generation, record)` pair.
///
/// Responses are applied in issue order, not arrival order: a slower request
/// issued earlier must not overwrite state fetched after it. `apply` refuses
/// stale generations and reports the refusal to the caller.
#[derive(Debug, Default)]
pub struct RecordCell {
    latest: Mutex<Option<(u64, AttendanceRecord)>>,
}

impl RecordCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a response. Returns false (and keeps the stored record) when a
    /// response with an equal or newer generation was already applied.
    pub fn apply(&self, generation: u64, record: AttendanceRecord) -> bool {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        match latest.as_ref() {
            Some((applied, _)) if *applied >= generation => false,
            _ => {
                *latest = Some((generation, record));
                true
            }
        }
    }

    pub fn latest(&self) -> Option<AttendanceRecord> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(_, record)| record.clone())
    }

    pub fn generation(&self) -> u64 {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(generation, _)| *generation)
            .unwrap_or(0)
    }
}
