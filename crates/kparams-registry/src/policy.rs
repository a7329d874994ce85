//! Tunable registry policy.

use serde::{Deserialize, Serialize};

use crate::rule::RuleTable;

/// Policy knobs for the registry driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryPolicy {
    /// Override for the offsets table's declared quorum.
    #[serde(default)]
    pub min_offsets: Option<usize>,
}

impl RegistryPolicy {
    /// The number of offset rules that must fire: the override if set, else
    /// the table's declared quorum, else zero.
    pub fn required_offsets(&self, offsets: &RuleTable) -> usize {
        self.min_offsets.or(offsets.quorum()).unwrap_or(0)
    }
}
