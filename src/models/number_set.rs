use serde::{Deserialize, Serialize};

use crate::services::number_set_store::NumberSetEntry;

/// Body for POST /submit_multiple_numbers: ten numbers in one
/// comma-separated string.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitNumbersRequest {
    pub numbers: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitNumbersResponse {
    pub message: String,
    pub submitted_numbers: Vec<String>,
}

/// One history entry on the wire; internal row ids are stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberSetEntryResponse {
    pub numbers: Vec<String>,
    pub submitted_at: String,
}

impl From<NumberSetEntry> for NumberSetEntryResponse {
    fn from(entry: NumberSetEntry) -> Self {
        Self {
            numbers: entry.numbers,
            submitted_at: entry.submitted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
