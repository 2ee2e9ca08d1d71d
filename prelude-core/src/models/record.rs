//! Server records whose shape this SDK passes through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::queue::RunCode;

macro_rules! json_record {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Map<String, Value>);

        impl $name {
            /// A single field, if present.
            pub fn get(&self, key: &str) -> Option<&Value> {
                self.0.get(key)
            }

            /// A string field, if present and a string.
            pub fn get_str(&self, key: &str) -> Option<&str> {
                self.0.get(key).and_then(Value::as_str)
            }

            /// All fields as sent by the server.
            pub fn fields(&self) -> &Map<String, Value> {
                &self.0
            }

            pub fn into_fields(self) -> Map<String, Value> {
                self.0
            }
        }

        impl From<Map<String, Value>> for $name {
            fn from(fields: Map<String, Value>) -> Self {
                Self(fields)
            }
        }
    };
}

json_record!(
    /// A single recorded detection probe.
    Probe
);

json_record!(
    /// Per-test statistical aggregate over a day window.
    Stats
);

json_record!(
    /// A test queued for the account's endpoints, as reported by the server.
    QueueEntry
);

impl QueueEntry {
    /// Test id, when sent as a string.
    pub fn test(&self) -> Option<&str> {
        self.get_str("test")
    }

    /// Raw schedule code from `run_code`, falling back to `code`.
    pub fn run_code_raw(&self) -> Option<i64> {
        ["run_code", "code"]
            .into_iter()
            .find_map(|key| self.get(key).and_then(Value::as_i64))
    }

    /// The schedule, if the server sent a known code.
    pub fn run_code(&self) -> Option<RunCode> {
        self.run_code_raw().and_then(RunCode::from_code)
    }

    /// String tags; missing or non-string entries are skipped.
    pub fn tags(&self) -> Vec<&str> {
        self.get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Start marker, in whatever form the server sent it.
    pub fn started(&self) -> Option<&Value> {
        self.get("started")
    }
}
