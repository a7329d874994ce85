//! The parameter store.
//!
//! Rules write into the store during initialization; later writes to the
//! same key replace earlier ones. Once the driver seals the store it is only
//! reachable through a shared reference, so it can no longer change.

use std::collections::BTreeMap;

use crate::error::{RegistryError, Result};
use crate::key::{ParameterKey, ParameterValue};

/// Mapping from parameter key to resolved value.
#[derive(Debug, Default)]
pub struct ParameterStore {
    values: BTreeMap<ParameterKey, ParameterValue>,
    sealed: bool,
}

impl ParameterStore {
    /// Create an empty, unsealed store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a parameter, replacing any earlier value.
    pub fn set(&mut self, key: ParameterKey, value: ParameterValue) {
        debug_assert!(!self.sealed, "write to sealed store: {key}");
        self.values.insert(key, value);
    }

    /// Read a parameter during initialization.
    ///
    /// Derived rules use this to read base parameters that earlier phases
    /// wrote.
    pub fn peek(&self, key: ParameterKey) -> Result<ParameterValue> {
        self.values
            .get(&key)
            .copied()
            .ok_or(RegistryError::UnresolvedParameter { key })
    }

    /// Read a parameter after initialization.
    ///
    /// Fails with [`RegistryError::UnresolvedParameter`] until the store is
    /// sealed, and for keys no rule wrote.
    pub fn get(&self, key: ParameterKey) -> Result<ParameterValue> {
        if !self.sealed {
            return Err(RegistryError::UnresolvedParameter { key });
        }
        self.peek(key)
    }

    /// Whether any rule has written `key`.
    pub fn contains(&self, key: ParameterKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Iterate over every written parameter in key order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, ParameterValue)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Number of distinct keys written.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key has been written.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the driver has frozen the store.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Freeze the store. Only the driver seals, once every phase succeeded.
    pub(crate) fn seal(&mut self) {
        self.sealed = true;
    }
}
