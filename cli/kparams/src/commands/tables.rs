//! `kparams tables` — list the built-in rule tables.

use anyhow::Result;
use kparams_platform::pattern::is_wildcard;
use kparams_platform::PlatformDescriptor;
use kparams_registry::{RuleTable, RuleTables};

fn render_table(table: &RuleTable, platform: Option<&PlatformDescriptor>) -> String {
    let mut out = format!("--- {} ---", table.name());
    if let Some(quorum) = table.quorum() {
        out.push_str(&format!(" (quorum {quorum})"));
    }
    out.push('\n');

    for rule in table.rules() {
        let mark = match platform {
            Some(p) if rule.matches(p) => "*",
            Some(_) => " ",
            None => "",
        };
        let catch_all = if is_wildcard(rule.devices) && is_wildcard(rule.builds) {
            "  [catch-all]"
        } else {
            ""
        };
        out.push_str(&format!(
            "{mark} {:<24} {:<32} {}{catch_all}\n",
            rule.name, rule.devices, rule.builds
        ));
    }

    if let Some(p) = platform {
        let fired = table.matching(p).count();
        out.push_str(&format!("  {fired} of {} rules match {p}\n", table.len()));
    }
    out
}

/// Render every built-in table, marking rules that fire for `platform`.
pub fn render(tables: &RuleTables, platform: Option<&PlatformDescriptor>) -> String {
    [&tables.system, &tables.offsets, &tables.derived]
        .into_iter()
        .map(|t| render_table(t, platform))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(platform: Option<PlatformDescriptor>) -> Result<()> {
    print!("{}", render(&RuleTables::builtin(), platform.as_ref()));
    Ok(())
}
