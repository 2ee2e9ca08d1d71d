use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Schedule on which endpoints run an enabled test.
///
/// Travels on the wire as its integer code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunCode {
    Debug,
    #[default]
    Daily,
    Weekly,
    Monthly,
    Once,
}

impl RunCode {
    pub const ALL: [RunCode; 5] = [
        Self::Debug,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Once,
    ];

    pub fn code(self) -> i64 {
        match self {
            Self::Debug => 0,
            Self::Daily => 1,
            Self::Weekly => 2,
            Self::Monthly => 3,
            Self::Once => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|rc| rc.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Once => "once",
        }
    }
}

impl fmt::Display for RunCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RunCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rc| rc.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown run code: {s}"))
    }
}

impl Serialize for RunCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for RunCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown run code {code}")))
    }
}

/// Request to put a test on the account queue.
///
/// `test` addresses the queue slot; only `run_code` and `tags` go in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnableTest {
    pub test: String,
    pub run_code: RunCode,
    pub tags: Vec<String>,
}

impl EnableTest {
    pub fn new(test: impl Into<String>, run_code: RunCode) -> Self {
        Self {
            test: test.into(),
            run_code,
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
