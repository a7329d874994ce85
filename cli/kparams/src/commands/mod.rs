//! CLI command implementations.

pub mod check;
pub mod resolve;
pub mod tables;

use anyhow::{Context, Result};
use kparams_platform::PlatformDescriptor;

use crate::config::KparamsConfig;

/// Pick the platform from command-line flags, falling back to the config.
pub fn resolve_platform(
    machine: Option<&str>,
    build: Option<&str>,
    config: &KparamsConfig,
) -> Result<Option<PlatformDescriptor>> {
    let machine = machine.or(config.machine());
    let build = build.or(config.build());
    match (machine, build) {
        (Some(machine), Some(build)) => PlatformDescriptor::new(machine, build)
            .map(Some)
            .context("invalid platform"),
        (None, None) => Ok(None),
        (Some(_), None) => anyhow::bail!("--machine given without --build"),
        (None, Some(_)) => anyhow::bail!("--build given without --machine"),
    }
}

/// Like [`resolve_platform`], but a platform is required.
pub fn require_platform(
    machine: Option<&str>,
    build: Option<&str>,
    config: &KparamsConfig,
) -> Result<PlatformDescriptor> {
    resolve_platform(machine, build, config)?.context(
        "no platform: pass --machine and --build, or set [platform] in kparams.toml",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformConfig;

    fn config(machine: Option<&str>, build: Option<&str>) -> KparamsConfig {
        KparamsConfig {
            platform: Some(PlatformConfig {
                machine: machine.map(String::from),
                build: build.map(String::from),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn flags_override_config() {
        let cfg = config(Some("iPhone8,1"), Some("16E227"));
        let p = require_platform(Some("iPhone8,2"), None, &cfg).unwrap();
        assert_eq!(p.machine(), "iPhone8,2");
        assert_eq!(p.os_version(), "16E227");
    }

    #[test]
    fn missing_platform() {
        let cfg = KparamsConfig::default();
        assert!(resolve_platform(None, None, &cfg).unwrap().is_none());
        assert!(require_platform(None, None, &cfg).is_err());
        assert!(resolve_platform(Some("iPhone8,2"), None, &cfg).is_err());
    }
}
