//! Static file server settings.

use crate::errors::{Error, Result};

/// Environment variable overriding `[server] port`.
pub const PORT_VAR: &str = "PORT";

/// Port used when nothing else is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// Interface bound by default.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Directory served by default.
pub const DEFAULT_ROOT: &str = "public";

/// Reads `PORT` through `lookup`.
///
/// # Errors
/// Returns `Config` when the variable is set but is not a port number.
pub fn port_override<F>(lookup: &F) -> Result<Option<u16>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(PORT_VAR) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|e| Error::Config {
        message: format!("{PORT_VAR} must be a port number, got '{raw}': {e}"),
    })
}
