//! JSON document store.
//!
//! The whole [`PortalState`] lives in one JSON file. Loading never fails: a
//! missing or unreadable document is treated as an empty state, and individual
//! records that do not parse are skipped. Saving writes a sibling temporary
//! file and renames it over the document, so a reader never sees a
//! half-written state.

pub mod seed;

use crate::{entities::PortalState, errors::Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument, warn};

/// File-backed store for the portal state.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store backed by the file at `path`. Nothing is read yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored document, returning an empty state when it is absent or
    /// cannot be parsed. Records that do not match the entity shapes are
    /// skipped; the rest of the document still loads.
    #[must_use]
    pub fn load(&self) -> PortalState {
        self.read().0
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read(&self) -> (PortalState, LoadStatus) {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored state yet, starting empty");
                return (PortalState::default(), LoadStatus::Clean);
            }
            Err(e) => {
                warn!("Failed to read stored state, starting empty: {}", e);
                return (PortalState::default(), LoadStatus::Damaged);
            }
        };

        let document = match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Null) => return (PortalState::default(), LoadStatus::Clean),
            Ok(Value::Object(document)) => document,
            Ok(other) => {
                warn!("Stored state is not a JSON object, starting empty: {}", other);
                return (PortalState::default(), LoadStatus::Damaged);
            }
            Err(e) => {
                warn!("Stored state is corrupt, starting empty: {}", e);
                return (PortalState::default(), LoadStatus::Damaged);
            }
        };

        let (state, skipped) = state_from_document(document);
        debug!(
            users = state.users.len(),
            events = state.events.len(),
            registrations = state.registrations.len(),
            skipped,
            "Loaded stored state"
        );
        let status = if skipped == 0 {
            LoadStatus::Clean
        } else {
            LoadStatus::Partial
        };
        (state, status)
    }

    /// Serializes the full state and replaces the stored document.
    ///
    /// # Errors
    /// Returns an error if the state cannot be serialized or the file cannot be
    /// written.
    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    pub fn save(&self, state: &PortalState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(state)?;
        let tmp_path = self.temp_path();
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        debug!("Saved state");
        Ok(())
    }

    /// Loads the document and seeds it on first run. The document is only
    /// written when seeding added something.
    ///
    /// A document that could not be read in full is first kept as
    /// `<file>.corrupt`, so later saves never destroy the original records.
    ///
    /// # Errors
    /// Returns an error if the backup or the seeded state cannot be written.
    pub fn load_seeded(&self, today: NaiveDate) -> Result<PortalState> {
        let (mut state, status) = self.read();
        match status {
            LoadStatus::Clean => {}
            LoadStatus::Partial => {
                fs::copy(&self.path, self.backup_path())?;
                warn!(
                    backup = %self.backup_path().display(),
                    "Kept a copy of the partially loaded state"
                );
            }
            LoadStatus::Damaged => {
                fs::rename(&self.path, self.backup_path())?;
                warn!(
                    backup = %self.backup_path().display(),
                    "Moved the unreadable state aside"
                );
            }
        }

        if seed::ensure_seed(&mut state, today) {
            info!(path = %self.path.display(), "Seeded default users and events");
            self.save(&state)?;
        }
        Ok(state)
    }

    fn backup_path(&self) -> PathBuf {
        self.sibling_path(".corrupt")
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling_path(".tmp")
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

/// How much of the stored document made it into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadStatus {
    /// Everything loaded, or there was nothing to load
    Clean,
    /// Valid JSON, but some records were skipped
    Partial,
    /// Unreadable or not a JSON object; nothing loaded
    Damaged,
}

/// Builds the state collection by collection, skipping records that do not
/// deserialize. Returns the state and the number of skipped entries.
fn state_from_document(mut document: Map<String, Value>) -> (PortalState, usize) {
    let mut skipped = 0;
    let state = PortalState {
        users: records(&mut document, "users", &mut skipped),
        events: records(&mut document, "events", &mut skipped),
        registrations: records(&mut document, "registrations", &mut skipped),
        smc_bor: records(&mut document, "smcbor", &mut skipped),
        adult_leader_signups: records(&mut document, "adultLeaderSignups", &mut skipped),
        current_user_id: document
            .remove("currentUserId")
            .and_then(|v| v.as_str().map(str::to_string)),
    };
    (state, skipped)
}

fn records<T: DeserializeOwned>(
    document: &mut Map<String, Value>,
    key: &str,
    skipped: &mut usize,
) -> Vec<T> {
    let items = match document.remove(key) {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            warn!(key, "Expected a list, skipping: {}", other);
            *skipped += 1;
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(key, index, "Skipping unreadable record: {}", e);
                *skipped += 1;
                None
            }
        })
        .collect()
}
