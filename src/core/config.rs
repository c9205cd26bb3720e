//! Configuration constants and option resolution

use tracing::{debug, warn};

// Display defaults
pub const DEFAULT_MAX_ITEMS: usize = 3;
pub const DEFAULT_SEPARATOR: &str = " / ";
pub const DEFAULT_ELLIPSIS: &str = "…";
pub const CHILDREN_MARKER: &str = "▾";
pub const HOME_LABEL: &str = "~";
pub const ROOT_LABEL: &str = "/";
pub const HIDDEN_PREFIX: &str = "hidden:";

// Environment variables
pub const MAX_ITEMS_ENV: &str = "CRUMBS_MAX_ITEMS";
pub const CONFIG_PATH_ENV: &str = "CRUMBS_CONFIG";

// Config file location under the platform config directory
pub const CONFIG_DIR_NAME: &str = "crumbs";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Reading a trail from stdin
pub const STDIN_PATH: &str = "-";

/// Clamps a signed limit into the unsigned range used by `condense`
///
/// Negative limits become 0, which means "no limit".
pub fn clamp_max_items(value: i64) -> usize {
    if value < 0 {
        warn!(value, "negative max items treated as unlimited");
        return 0;
    }
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Determines the visible slot budget from CLI args, environment and config
///
/// Priority order:
/// 1. --unlimited flag → None
/// 2. --max-items N flag → N
/// 3. CRUMBS_MAX_ITEMS env var → N (unparseable values are ignored)
/// 4. max_items in the config file → N
/// 5. Default → 3
pub fn resolve_max_items(flag: Option<i64>, unlimited: bool, configured: Option<i64>) -> Option<usize> {
    if unlimited {
        return None;
    }

    if let Some(n) = flag {
        debug!(max_items = n, "max items from command line");
        return Some(clamp_max_items(n));
    }

    if let Ok(raw) = std::env::var(MAX_ITEMS_ENV) {
        match raw.trim().parse::<i64>() {
            Ok(n) => {
                debug!(max_items = n, "max items from {MAX_ITEMS_ENV}");
                return Some(clamp_max_items(n));
            }
            Err(e) => warn!(value = %raw, "ignoring {MAX_ITEMS_ENV}: {e}"),
        }
    }

    if let Some(n) = configured {
        debug!(max_items = n, "max items from config file");
        return Some(clamp_max_items(n));
    }

    Some(DEFAULT_MAX_ITEMS)
}
