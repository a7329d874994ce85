//! The platform probe seam.
//!
//! Discovering the identity of a live device is the job of the host tool.
//! The registry only needs something that hands it a descriptor once.

use crate::error::Result;
use crate::platform::PlatformDescriptor;

/// A source of the running platform's identity.
pub trait PlatformProbe {
    /// Determine the platform. Called at most once per registry.
    fn probe(&self) -> Result<PlatformDescriptor>;
}

/// A probe that reports a descriptor supplied up front.
#[derive(Debug, Clone)]
pub struct FixedPlatform(pub PlatformDescriptor);

impl FixedPlatform {
    /// Build a fixed probe from machine and build identifiers.
    pub fn new(machine: impl Into<String>, os_version: impl Into<String>) -> Result<Self> {
        PlatformDescriptor::new(machine, os_version).map(Self)
    }
}

impl PlatformProbe for FixedPlatform {
    fn probe(&self) -> Result<PlatformDescriptor> {
        Ok(self.0.clone())
    }
}

impl<F> PlatformProbe for F
where
    F: Fn() -> Result<PlatformDescriptor>,
{
    fn probe(&self) -> Result<PlatformDescriptor> {
        self()
    }
}
