//! Parameters computed from other parameters.
//!
//! Derived rules only read base parameters that the offsets phase already
//! wrote. A missing or zero base value is a defect in the tables, reported
//! as an error rather than papered over.

use log::debug;

use crate::error::{RegistryError, Result};
use crate::key::ParameterKey;
use crate::rule::{Rule, RuleTable};
use crate::store::ParameterStore;

/// Set `COUNT_PER_BLOCK(structure)` to `BLOCK_SIZE(structure) / SIZE(structure)`.
pub fn count_per_block(store: &mut ParameterStore, structure: &'static str) -> Result<()> {
    let target = ParameterKey::CountPerBlock(structure);
    let block_size = store.peek(ParameterKey::BlockSize(structure))?;
    let size_key = ParameterKey::Size(structure);
    let size = store.peek(size_key)?;
    if size == 0 {
        return Err(RegistryError::ZeroDivisor {
            key: size_key,
            target,
        });
    }
    let count = block_size / size;
    debug!("{target} = {block_size:#x} / {size:#x} = {count}");
    store.set(target, count);
    Ok(())
}

/// Structures whose zone holds a whole number of elements per block.
const ZONED_STRUCTURES: &[&str] = &["ipc_port", "ipc_voucher"];

/// A derived table computing `COUNT_PER_BLOCK` for each listed structure.
pub fn table_for(structures: &[&'static str]) -> RuleTable {
    let structures = structures.to_vec();
    let computed_offsets = move |store: &mut ParameterStore| -> Result<()> {
        for structure in &structures {
            count_per_block(store, *structure)?;
        }
        Ok(())
    };
    RuleTable::new("derived").rule(Rule::new("*", "*", "computed_offsets", computed_offsets))
}

/// Derived parameter rules.
pub fn table() -> RuleTable {
    table_for(ZONED_STRUCTURES)
}
