/// `portal.toml` file format and loading
pub mod settings;

/// Store location resolution (`PORTAL_STORE_PATH`)
pub mod storage;

/// Static file server settings (`PORT`)
pub mod server;

pub use settings::{PortalConfig, ServerConfig, StoreConfig};

use crate::errors::Result;
use std::path::Path;
use tracing::{debug, info};

/// Loads the portal configuration.
///
/// An explicit `path` must exist; without one, `portal.toml` in the working
/// directory is read if present and defaults are used otherwise. Environment
/// variables are applied on top of the file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if an override
/// variable holds an invalid value.
pub fn load_app_configuration(path: Option<&Path>) -> Result<PortalConfig> {
    let config = match path {
        Some(path) => settings::load_config(path)?,
        None => settings::load_default_config()?,
    };
    debug!(?config, "Configuration file processed");

    let config = config.with_env_overrides(|key| std::env::var(key).ok())?;
    info!(
        store = %config.store.path.display(),
        addr = %config.server.bind_address(),
        "Configuration loaded"
    );
    Ok(config)
}
