//! `kparams check` — report whether a platform is recognized.

use anyhow::Result;
use kparams_platform::{FixedPlatform, PlatformDescriptor};
use kparams_registry::{Registry, RegistryError, RegistryPolicy};

/// Returns `true` if the registry initializes for `platform`.
///
/// An unrecognized platform is a normal outcome; table defects are errors.
pub fn run(platform: PlatformDescriptor, policy: &RegistryPolicy) -> Result<bool> {
    let mut registry = Registry::new(FixedPlatform(platform.clone())).with_policy(policy.clone());
    match registry.try_init() {
        Ok(params) => {
            println!("{platform}: recognized ({} parameters)", params.len());
            Ok(true)
        }
        Err(RegistryError::QuorumNotMet {
            matched, required, ..
        }) => {
            println!("{platform}: not recognized ({matched} of {required} offset rules matched)");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
