//! Public API for the core module.
//!
//! This module provides the stable public API for configuration:
//! - Display defaults and environment variable names
//! - Settings file loading
//! - Slot budget resolution

// Settings
pub use super::settings::{default_config_path, Settings, SettingsSource};

// Option resolution
pub use super::config::{clamp_max_items, resolve_max_items};

// Configuration constants
pub use super::config::{
    CHILDREN_MARKER, CONFIG_PATH_ENV, DEFAULT_ELLIPSIS, DEFAULT_MAX_ITEMS, DEFAULT_SEPARATOR,
    MAX_ITEMS_ENV,
};

// Internal constants for command and render modules
pub(crate) use super::config::{HIDDEN_PREFIX, HOME_LABEL, ROOT_LABEL, STDIN_PATH};
