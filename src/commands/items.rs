//! `crumbs items`: condense a JSON breadcrumb trail

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::DisplayArgs;
use crate::core::{Settings, STDIN_PATH};
use crate::trail::Trail;

/// Reads a trail from `input` (a file, or stdin for `-`/none) and condenses it
pub fn handle_items_command(input: Option<PathBuf>, args: &DisplayArgs, settings: &Settings) -> Result<String> {
    let trail = match input.as_deref() {
        Some(path) if path != Path::new(STDIN_PATH) => read_trail_file(path)?,
        _ => Trail::from_reader(std::io::stdin().lock()).context("failed to read trail from stdin")?,
    };

    format_trail(&trail, args, settings)
}

pub fn read_trail_file(path: &Path) -> Result<Trail> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Trail::from_reader(file).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn format_trail(trail: &Trail, args: &DisplayArgs, settings: &Settings) -> Result<String> {
    let display = args.resolve(settings);
    let condensed = trail.condense(display.options);
    debug!(
        crumbs = trail.len(),
        visible = condensed.crumbs.len(),
        hidden = condensed.hidden_len(),
        "condensed trail"
    );

    display.format(&condensed)
}
