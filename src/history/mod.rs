//! Bounded conversion history.
//!
//! Successful conversions are recorded newest-first into a [`HistoryLog`]
//! capped at [`HISTORY_CAP`] entries; inserting beyond the cap evicts the
//! oldest. Failed conversions are never recorded; recording happens only
//! after a result is shown. The log is session-scoped: persistence lives in
//! [`crate::storage::session`] and a fresh session starts empty.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::models::{ConversionMode, HistoryEntry};

/// Maximum number of retained entries
pub const HISTORY_CAP: usize = 10;

/// Newest-first log of recent conversions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful conversion, evicting the oldest entry beyond the cap
    pub fn record(
        &mut self,
        mode: ConversionMode,
        input_text: impl Into<String>,
        output_text: impl Into<String>,
    ) {
        self.insert(HistoryEntry::new(mode, input_text, output_text));
    }

    /// Insert a prebuilt entry at the front, then truncate to the cap
    pub fn insert(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAP);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries newest-first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
