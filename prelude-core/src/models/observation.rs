use serde::{Deserialize, Serialize};

/// Caller confirmation of a prior detection result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub row_id: String,
    pub value: String,
}

impl Observation {
    pub fn new(row_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            row_id: row_id.into(),
            value: value.into(),
        }
    }
}
