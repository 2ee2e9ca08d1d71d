use serde::{Deserialize, Serialize};

/// Registration of a caller-controlled endpoint (device or session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRegistration {
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl EndpointRegistration {
    /// Registration with no tags.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
