//! `crumbs path`: condense a filesystem path

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::DisplayArgs;
use crate::core::Settings;
use crate::utils::path_trail;

/// Condenses `path` (default: current directory) for display
pub fn handle_path_command(
    path: Option<PathBuf>,
    no_home: bool,
    args: &DisplayArgs,
    settings: &Settings,
) -> Result<String> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let home = if no_home { None } else { dirs::home_dir() };

    format_path(&path, home.as_deref(), args, settings)
}

/// Formats a path with an explicit home directory
pub fn format_path(path: &Path, home: Option<&Path>, args: &DisplayArgs, settings: &Settings) -> Result<String> {
    let display = args.resolve(settings);
    let trail = path_trail(path, home);
    debug!(path = %path.display(), crumbs = trail.len(), "condensing path");

    display.format(&trail.condense(display.options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_path_text() {
        let args = DisplayArgs {
            max_items: Some(3),
            ..DisplayArgs::default()
        };
        let output = format_path(
            Path::new("/home/alex/src/crumbs/src"),
            Some(Path::new("/home/alex")),
            &args,
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(output, "~ / … / src");
    }

    #[test]
    fn test_format_path_show_hidden() {
        let args = DisplayArgs {
            max_items: Some(3),
            show_hidden: true,
            ..DisplayArgs::default()
        };
        let output = format_path(Path::new("/a/b/c/d"), None, &args, &Settings::default()).unwrap();
        assert_eq!(output, "/ / … / d\nhidden: 3 a, b, c");
    }
}
