//! Durable cache: one JSON slot holding the serialized aggregate.
//!
//! The cache owns its slot path exclusively. Loading fails soft: a
//! missing or corrupt slot yields the seed data instead of an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::app_data::AppData;

pub struct LocalCache {
    path: PathBuf,
}

impl LocalCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the persisted aggregate, or the seed data when the slot
    /// is missing or unreadable. Never fails.
    pub fn load(&self) -> AppData {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return AppData::seed(),
            Err(e) => {
                log::warn!("Failed to read cache slot {}: {e}", self.path.display());
                return AppData::seed();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                log::warn!(
                    "Cache slot {} is corrupt, falling back to seed data: {e}",
                    self.path.display()
                );
                AppData::seed()
            }
        }
    }

    /// Serializes and writes the full aggregate. Writes go through a
    /// sibling temp file and a rename so a crash cannot truncate the slot.
    pub fn save(&self, data: &AppData) -> io::Result<()> {
        let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }
}
