//! Store location.

use std::path::PathBuf;

/// Environment variable overriding `[store] path`.
pub const STORE_PATH_VAR: &str = "PORTAL_STORE_PATH";

/// Store location used when nothing else is configured.
pub const DEFAULT_STORE_PATH: &str = "data/portal.json";

/// Reads `PORTAL_STORE_PATH` through `lookup`; blank values are ignored.
pub fn store_path_override<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(STORE_PATH_VAR)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
