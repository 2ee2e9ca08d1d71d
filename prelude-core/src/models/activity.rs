use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome counts for one test over the reporting window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityCounts {
    #[serde(rename = "OK")]
    pub ok: u64,
    #[serde(rename = "DETECTED")]
    pub detected: u64,
    #[serde(rename = "FAILED")]
    pub failed: u64,
    #[serde(rename = "ERROR")]
    pub error: u64,
}

/// Rounded share of each outcome, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityPercentages {
    pub ok: u64,
    pub detected: u64,
    pub failed: u64,
    pub error: u64,
}

impl ActivityCounts {
    /// Total number of results.
    pub fn volume(&self) -> u64 {
        self.ok + self.detected + self.failed + self.error
    }

    /// Percentages of the volume, halves rounded to even; all zero when
    /// there were no results.
    pub fn percentages(&self) -> ActivityPercentages {
        let volume = self.volume();
        if volume == 0 {
            return ActivityPercentages::default();
        }
        let pct = |n: u64| ((n as f64 / volume as f64) * 100.0).round_ties_even() as u64;
        ActivityPercentages {
            ok: pct(self.ok),
            detected: pct(self.detected),
            failed: pct(self.failed),
            error: pct(self.error),
        }
    }
}

/// Account activity report: outcome counts keyed by test id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountActivity(BTreeMap<String, ActivityCounts>);

impl AccountActivity {
    pub fn get(&self, test: &str) -> Option<&ActivityCounts> {
        self.0.get(test)
    }

    /// Tests in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityCounts)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ActivityCounts)> for AccountActivity {
    fn from_iter<I: IntoIterator<Item = (String, ActivityCounts)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
