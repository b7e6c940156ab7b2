use serde::{Deserialize, Serialize};

use crate::core::{CompareOptions, RankOptions};
use crate::error::{TrendError, TrendResult};

/// Public engine configuration: comparison policy plus ranking policy.
///
/// This type is serializable so host applications can persist/load view
/// setups without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendEngineConfig {
    pub compare: CompareOptions,
    pub rank: RankOptions,
}

impl TrendEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_compare(mut self, compare: CompareOptions) -> Self {
        self.compare = compare;
        self
    }

    #[must_use]
    pub fn with_rank(mut self, rank: RankOptions) -> Self {
        self.rank = rank;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> TrendResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TrendError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> TrendResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TrendError::InvalidData(format!("failed to parse config: {e}")))
    }
}
