//! The built-in rule tables.
//!
//! Tables are evaluated in three phases: general system parameters, then
//! structure offsets, then parameters derived from those offsets.

pub mod offsets;
pub mod system;

use crate::derived;
use crate::rule::RuleTable;

/// The three tables the driver evaluates, one per phase.
#[derive(Debug)]
pub struct RuleTables {
    /// General system parameters. Carries no quorum.
    pub system: RuleTable,
    /// Platform-specific structure offsets. Its match count decides the quorum.
    pub offsets: RuleTable,
    /// Parameters computed from offsets. Runs only after `offsets` completes.
    pub derived: RuleTable,
}

impl RuleTables {
    /// The compiled-in tables.
    pub fn builtin() -> Self {
        Self {
            system: system::table(),
            offsets: offsets::table(),
            derived: derived::table(),
        }
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::builtin()
    }
}
