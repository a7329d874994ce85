//! `kparams resolve` — print the parameters for a platform.

use anyhow::{bail, Result};
use kparams_platform::{FixedPlatform, PlatformDescriptor};
use kparams_registry::{Parameters, Registry, RegistryPolicy};

/// Run the registry for `platform` and return its parameters.
pub fn resolve(platform: PlatformDescriptor, policy: &RegistryPolicy) -> Result<Parameters> {
    let mut registry = Registry::new(FixedPlatform(platform)).with_policy(policy.clone());
    let params = registry.try_init()?;
    Ok(params.clone())
}

/// Render parameters as aligned text.
pub fn render_text(params: &Parameters) -> String {
    let mut out = format!("Platform: {}\n", params.platform());
    for (key, value) in params.iter() {
        out.push_str(&format!("  {:<40} {value:#x}\n", key.to_string()));
    }
    out
}

/// Render parameters as JSON.
pub fn render_json(params: &Parameters) -> Result<String> {
    let doc = serde_json::json!({
        "platform": params.platform(),
        "parameters": params,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn run(
    platform: PlatformDescriptor,
    policy: &RegistryPolicy,
    format: Option<&str>,
    key: Option<&str>,
) -> Result<()> {
    let params = resolve(platform, policy)?;

    if let Some(name) = key {
        match params.find(name) {
            Some((_, value)) => println!("{value:#x}"),
            None => bail!("parameter '{name}' is not set for {}", params.platform()),
        }
        return Ok(());
    }

    match format.unwrap_or("text") {
        "text" => print!("{}", render_text(&params)),
        "json" => println!("{}", render_json(&params)?),
        other => bail!("unknown format '{other}' (expected text or json)"),
    }
    Ok(())
}
