use anyhow::{Context, Result};
use poo_learning_core::Metadata;
use tracing::debug;

/// Render the identity banner, or the metadata snapshot as JSON.
pub fn render_info(meta: &Metadata, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(meta).context("Failed to serialize metadata to JSON")
    } else {
        Ok(meta.banner())
    }
}

/// Render a single scalar value, quoted when emitting JSON.
pub fn render_value(value: &str, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(value).context("Failed to serialize value to JSON")
    } else {
        Ok(value.to_string())
    }
}

/// Print the `name vVERSION` banner.
pub fn info_command(json: bool) -> Result<()> {
    let meta = Metadata::current();
    debug!(name = meta.name, version = meta.version, "rendering info");
    println!("{}", render_info(&meta, json)?);
    Ok(())
}

/// Print the application name.
pub fn name_command(json: bool) -> Result<()> {
    debug!("rendering name");
    println!("{}", render_value(poo_learning_core::application_name(), json)?);
    Ok(())
}

/// Print the version string.
pub fn version_command(json: bool) -> Result<()> {
    debug!("rendering version");
    println!("{}", render_value(poo_learning_core::version(), json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_text_is_banner() {
        let out = render_info(&Metadata::current(), false).unwrap();
        assert_eq!(out, "poo_python_learning v0.1.0");
    }

    #[test]
    fn info_json_has_both_fields() {
        let out = render_info(&Metadata::current(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["name"], "poo_python_learning");
        assert_eq!(parsed["version"], "0.1.0");
    }

    #[test]
    fn values_are_quoted_only_in_json() {
        assert_eq!(render_value("0.1.0", false).unwrap(), "0.1.0");
        assert_eq!(render_value("0.1.0", true).unwrap(), "\"0.1.0\"");
    }
}
