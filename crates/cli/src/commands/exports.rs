use anyhow::{Context, Result};
use poo_learning_core::{resolve_public_name, EXPORTS};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::render_value;

/// One exported metadata constant and its value.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ExportEntry {
    pub name: String,
    pub value: String,
}

/// Every exported constant, in export order.
pub fn collect_exports() -> Vec<ExportEntry> {
    EXPORTS
        .iter()
        .map(|(name, value)| ExportEntry { name: name.to_string(), value: value.to_string() })
        .collect()
}

/// Render exports as `NAME = value` lines, or as a JSON array.
pub fn render_exports(entries: &[ExportEntry], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(entries)
            .context("Failed to serialize exports to JSON");
    }

    let lines: Vec<String> =
        entries.iter().map(|entry| format!("{} = {}", entry.name, entry.value)).collect();
    Ok(lines.join("\n"))
}

/// List every exported metadata constant.
pub fn exports_command(json: bool) -> Result<()> {
    let entries = collect_exports();
    debug!(count = entries.len(), "collected exports");
    println!("{}", render_exports(&entries, json)?);
    Ok(())
}

/// Print the value of one exported constant.
pub fn get_command(name: &str, json: bool) -> Result<()> {
    let value = resolve_public_name(name).context("Lookup failed")?;
    info!(name, "resolved exported name");
    println!("{}", render_value(value, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_cover_both_constants() {
        assert_eq!(
            collect_exports(),
            vec![
                ExportEntry { name: "APP_NAME".into(), value: "poo_python_learning".into() },
                ExportEntry { name: "VERSION".into(), value: "0.1.0".into() },
            ]
        );
    }

    #[test]
    fn text_rendering_is_one_line_per_export() {
        let out = render_exports(&collect_exports(), false).unwrap();
        assert_eq!(out, "APP_NAME = poo_python_learning\nVERSION = 0.1.0");
    }

    #[test]
    fn get_command_rejects_unknown_name() {
        let err = get_command("MISSING", false).unwrap_err();
        assert!(format!("{err:#}").contains("MISSING"));
    }
}
