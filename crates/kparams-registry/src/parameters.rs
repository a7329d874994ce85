//! Read-only parameter handle.
//!
//! The driver hands out a [`Parameters`] only once every phase succeeded.
//! It is cheap to clone and can be passed to any consumer that needs layout
//! knowledge of the target.

use std::sync::Arc;

use kparams_platform::PlatformDescriptor;
use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::key::{ParameterKey, ParameterValue};
use crate::keys;
use crate::store::ParameterStore;

/// Resolved parameters for one platform.
#[derive(Debug, Clone)]
pub struct Parameters {
    platform: PlatformDescriptor,
    store: Arc<ParameterStore>,
}

impl Parameters {
    /// Wrap a sealed store.
    pub(crate) fn new(platform: PlatformDescriptor, store: ParameterStore) -> Self {
        debug_assert!(store.is_sealed());
        Self {
            platform,
            store: Arc::new(store),
        }
    }

    /// The platform these parameters were resolved for.
    pub fn platform(&self) -> &PlatformDescriptor {
        &self.platform
    }

    pub fn get(&self, key: ParameterKey) -> Result<ParameterValue> {
        self.store.get(key)
    }

    /// Every resolved parameter in key order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, ParameterValue)> + '_ {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Find a resolved parameter by its textual key, e.g. `SIZE(ipc_port)`.
    pub fn find(&self, name: &str) -> Option<(ParameterKey, ParameterValue)> {
        self.iter().find(|(key, _)| key.to_string() == name)
    }

    pub fn kernel_base(&self) -> Result<ParameterValue> {
        self.get(keys::KERNEL_BASE)
    }

    pub fn kernel_slide_step(&self) -> Result<ParameterValue> {
        self.get(keys::KERNEL_SLIDE_STEP)
    }

    pub fn message_size_for_kmsg_zone(&self) -> Result<ParameterValue> {
        self.get(keys::MESSAGE_SIZE_FOR_KMSG_ZONE)
    }

    pub fn kmsg_zone_size(&self) -> Result<ParameterValue> {
        self.get(keys::KMSG_ZONE_SIZE)
    }

    pub fn max_ool_ports_per_message(&self) -> Result<ParameterValue> {
        self.get(keys::MAX_OOL_PORTS_PER_MESSAGE)
    }

    pub fn gc_step(&self) -> Result<ParameterValue> {
        self.get(keys::GC_STEP)
    }

    /// `OFFSET(structure, field)`.
    pub fn offset(&self, structure: &'static str, field: &'static str) -> Result<ParameterValue> {
        self.get(ParameterKey::Offset { structure, field })
    }

    /// `SIZE(structure)`.
    pub fn size(&self, structure: &'static str) -> Result<ParameterValue> {
        self.get(ParameterKey::Size(structure))
    }

    /// `BLOCK_SIZE(structure)`.
    pub fn block_size(&self, structure: &'static str) -> Result<ParameterValue> {
        self.get(ParameterKey::BlockSize(structure))
    }

    /// `COUNT_PER_BLOCK(structure)`.
    pub fn count_per_block(&self, structure: &'static str) -> Result<ParameterValue> {
        self.get(ParameterKey::CountPerBlock(structure))
    }
}

impl Serialize for Parameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;

    fn sample() -> Parameters {
        let mut store = ParameterStore::new();
        store.set(keys::GC_STEP, 0x20_0000);
        store.set(keys::ipc_port::SIZE, 0xa8);
        store.set(keys::task::BSD_INFO, 0x358);
        store.seal();
        Parameters::new(PlatformDescriptor::new("iPhone8,2", "16E227").unwrap(), store)
    }

    #[test]
    fn named_accessors() {
        let params = sample();
        assert_eq!(params.gc_step(), Ok(0x20_0000));
        assert_eq!(params.size("ipc_port"), Ok(0xa8));
        assert_eq!(params.offset("task", "bsd_info"), Ok(0x358));
        assert_eq!(params.platform().machine(), "iPhone8,2");
    }

    #[test]
    fn unset_key_is_unresolved() {
        let params = sample();
        assert_eq!(
            params.block_size("ipc_port"),
            Err(RegistryError::UnresolvedParameter {
                key: keys::ipc_port::BLOCK_SIZE
            })
        );
    }

    #[test]
    fn find_by_text() {
        let params = sample();
        assert_eq!(params.find("SIZE(ipc_port)"), Some((keys::ipc_port::SIZE, 0xa8)));
        assert_eq!(params.find("SIZE(task)"), None);
    }

    #[test]
    fn serializes_as_map() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["SIZE(ipc_port)"], 0xa8);
        assert_eq!(json["OFFSET(task, bsd_info)"], 0x358);
    }
}
