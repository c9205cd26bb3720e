//! `crumbs config`: show the effective settings

use anyhow::Result;

use crate::core::{Settings, SettingsSource};

/// Renders settings as TOML preceded by a comment naming their source
pub fn handle_config_command(settings: &Settings, source: &SettingsSource) -> Result<String> {
    let origin = match source {
        SettingsSource::File(path) => path.display().to_string(),
        SettingsSource::Defaults => "built-in defaults".to_string(),
    };
    Ok(format!("# {origin}\n{}", settings.to_toml()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_header() {
        let output = handle_config_command(&Settings::default(), &SettingsSource::Defaults).unwrap();
        assert!(output.starts_with("# built-in defaults\n"));
        assert!(output.contains("separator = \" / \""));
    }

    #[test]
    fn test_file_header() {
        let source = SettingsSource::File(PathBuf::from("/etc/crumbs.toml"));
        let output = handle_config_command(&Settings::default(), &source).unwrap();
        assert!(output.starts_with("# /etc/crumbs.toml\n"));
    }
}
