pub(crate) mod fs;

// Public API - utilities used by commands
pub use fs::{path_to_breadcrumbs, path_trail};
