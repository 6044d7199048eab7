//! `portal.toml` loading.
//!
//! Every key is optional. A missing section or key keeps its default, so an
//! empty file and no file at all configure the portal the same way:
//!
//! ```toml
//! [store]
//! path = "data/portal.json"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! root = "public"
//! ```

use super::{server, storage};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "portal.toml";

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortalConfig {
    /// Persistent store settings
    pub store: StoreConfig,
    /// Static file server settings
    pub server: ServerConfig,
}

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Location of the JSON state document
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(storage::DEFAULT_STORE_PATH),
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port
    pub port: u16,
    /// Directory served as `/`
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: server::DEFAULT_HOST.to_string(),
            port: server::DEFAULT_PORT,
            root: PathBuf::from(server::DEFAULT_ROOT),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl PortalConfig {
    /// Applies `PORTAL_STORE_PATH` and `PORT` as seen through `lookup`.
    ///
    /// # Arguments
    /// * `lookup` - Environment accessor, `std::env::var(..).ok()` in production
    ///
    /// # Errors
    /// Returns `Config` when `PORT` is not a valid port number.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = storage::store_path_override(&lookup) {
            self.store.path = path;
        }
        if let Some(port) = server::port_override(&lookup)? {
            self.server.port = port;
        }
        Ok(self)
    }
}

/// Parses a configuration document.
///
/// # Errors
/// Returns `Toml` for malformed documents or unknown keys.
pub fn parse_config(contents: &str) -> Result<PortalConfig> {
    Ok(toml::from_str(contents)?)
}

/// Loads the configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the configuration file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or contains unknown keys
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PortalConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_config(&contents)
}

/// Loads `./portal.toml`, or the defaults when that file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<PortalConfig> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
        Ok(PortalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.store.path, PathBuf::from("data/portal.json"));
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.server.root, PathBuf::from("public"));
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
            [server]
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_config("[store]\nfile = \"x.json\"\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\npath = \"/tmp/troop.json\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.store.path, PathBuf::from("/tmp/troop.json"));
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let config = PortalConfig::default()
            .with_env_overrides(|key| match key {
                "PORTAL_STORE_PATH" => Some("/srv/portal.json".to_string()),
                "PORT" => Some("8088".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.store.path, PathBuf::from("/srv/portal.json"));
        assert_eq!(config.server.port, 8088);

        let err = PortalConfig::default()
            .with_env_overrides(|key| (key == "PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
