//! General system parameters.

use crate::error::Result;
use crate::keys;
use crate::rule::{Rule, RuleTable};
use crate::store::ParameterStore;

const MB: u64 = 1024 * 1024;

fn system_parameters(store: &mut ParameterStore) -> Result<()> {
    store.set(keys::KERNEL_BASE, 0xFFFF_FFF0_0700_4000);
    store.set(keys::KERNEL_SLIDE_STEP, 0x1000);
    store.set(keys::MESSAGE_SIZE_FOR_KMSG_ZONE, 76);
    store.set(keys::KMSG_ZONE_SIZE, 256);
    store.set(keys::MAX_OOL_PORTS_PER_MESSAGE, 16382);
    store.set(keys::GC_STEP, 2 * MB);
    Ok(())
}

/// General system parameter rules by platform.
pub fn table() -> RuleTable {
    RuleTable::new("system").rule(Rule::new("*", "*", "system_parameters", system_parameters))
}
