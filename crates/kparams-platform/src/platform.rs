//! The platform descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};
use crate::pattern;

/// The identity of the running target: hardware model and OS build.
///
/// Fields are private so a descriptor cannot change after it is built.
/// Deserialization goes through [`PlatformDescriptor::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptor")]
pub struct PlatformDescriptor {
    machine: String,
    os_version: String,
}

#[derive(Deserialize)]
struct RawDescriptor {
    machine: String,
    os_version: String,
}

impl TryFrom<RawDescriptor> for PlatformDescriptor {
    type Error = PlatformError;

    fn try_from(raw: RawDescriptor) -> Result<Self> {
        Self::new(raw.machine, raw.os_version)
    }
}

impl PlatformDescriptor {
    /// Build a descriptor, rejecting empty identifiers.
    pub fn new(machine: impl Into<String>, os_version: impl Into<String>) -> Result<Self> {
        let machine = machine.into();
        let os_version = os_version.into();
        if machine.trim().is_empty() {
            return Err(PlatformError::EmptyIdentifier { field: "machine" });
        }
        if os_version.trim().is_empty() {
            return Err(PlatformError::EmptyIdentifier { field: "build" });
        }
        Ok(Self {
            machine,
            os_version,
        })
    }

    /// Hardware machine identifier (e.g. `iPhone8,2`).
    pub fn machine(&self) -> &str {
        &self.machine
    }

    /// OS build identifier (e.g. `16E227`).
    pub fn os_version(&self) -> &str {
        &self.os_version
    }

    /// Whether a (device pattern, build pattern) pair matches this platform.
    pub fn matches(&self, devices: &str, builds: &str) -> bool {
        pattern::matches(devices, &self.machine) && pattern::matches(builds, &self.os_version)
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.machine, self.os_version)
    }
}
