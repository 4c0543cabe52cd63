//! # File Favorites Repository
//!
//! Persists the waka favorites set as a single JSON array of entry ids in
//! `favorites.json` under the data directory, matching the fixed-key
//! key-value layout the widget has always used.
//!
//! ## File Format
//!
//! ```json
//! ["january-15", "december-01"]
//! ```
//!
//! Reads are forgiving by contract: a missing file, or any content that is
//! not a JSON array of strings, loads as the empty set. A favorites file
//! mangled by hand-editing must never surface as an error in the widget.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

use super::connection::FileConnection;
use crate::storage::traits::FavoritesStorage;

const FAVORITES_FILE: &str = "favorites.json";

/// File-backed favorites repository.
#[derive(Debug, Clone)]
pub struct FavoritesRepository {
    connection: FileConnection,
}

impl FavoritesRepository {
    pub fn new(connection: FileConnection) -> Self {
        Self { connection }
    }

    fn favorites_path(&self) -> PathBuf {
        self.connection.base_directory().join(FAVORITES_FILE)
    }
}

impl FavoritesStorage for FavoritesRepository {
    fn load(&self) -> Result<Vec<String>> {
        let path = self.favorites_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read favorites file {:?}", path))?;
        match serde_json::from_str::<Vec<String>>(&contents) {
            Ok(ids) => {
                debug!("Loaded {} favorites from {:?}", ids.len(), path);
                Ok(ids)
            }
            Err(e) => {
                warn!("Favorites file {:?} is not a JSON string array ({}), treating as empty", path, e);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, ids: &[String]) -> Result<()> {
        let path = self.favorites_path();
        let json = serde_json::to_string_pretty(ids)?;
        self.connection.write_atomic(&path, &json)?;
        debug!("Saved {} favorites to {:?}", ids.len(), path);
        Ok(())
    }
}
