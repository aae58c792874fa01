use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ConversionMode;

/// A single recorded conversion, newest-first in the history log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub mode: ConversionMode,
    pub input_text: String,
    pub output_text: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        mode: ConversionMode,
        input_text: impl Into<String>,
        output_text: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            input_text: input_text.into(),
            output_text: output_text.into(),
            timestamp: Utc::now(),
        }
    }
}
