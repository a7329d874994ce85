//! `kparams.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kparams_registry::RegistryPolicy;
use serde::{Deserialize, Serialize};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE: &str = "kparams.toml";

/// The top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KparamsConfig {
    /// Platform to resolve when none is given on the command line.
    #[serde(default)]
    pub platform: Option<PlatformConfig>,
    /// Registry policy.
    #[serde(default)]
    pub policy: RegistryPolicy,
}

/// Platform section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub machine: Option<String>,
    #[serde(default)]
    pub build: Option<String>,
}

impl KparamsConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Search upward from `start_dir` for `kparams.toml`.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, candidate)));
            }
            if !dir.pop() {
                return Ok(None);
            }
        }
    }

    /// Configured machine identifier, if any.
    pub fn machine(&self) -> Option<&str> {
        self.platform.as_ref()?.machine.as_deref()
    }

    /// Configured build identifier, if any.
    pub fn build(&self) -> Option<&str> {
        self.platform.as_ref()?.build.as_deref()
    }
}
