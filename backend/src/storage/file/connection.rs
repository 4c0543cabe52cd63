//! File-backed storage connection.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::favorites_repository::FavoritesRepository;
use super::settings_repository::SettingsRepository;
use crate::storage::traits::Connection;

/// FileConnection manages the data directory and hands out file-backed
/// repositories. Cheap to clone; repositories share the same base path.
#[derive(Debug, Clone)]
pub struct FileConnection {
    base_directory: PathBuf,
}

impl FileConnection {
    /// Create a connection rooted at `base_directory`, creating the
    /// directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {:?}", base_path))?;
        }
        Ok(Self { base_directory: base_path })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Write `contents` to `path` atomically: write a temp file next to the
    /// target, then rename over it. A crash mid-write leaves the old file
    /// intact instead of a truncated one.
    pub(crate) fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write temp file {:?}", temp_path))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to move temp file into place at {:?}", path))?;
        Ok(())
    }
}

impl Connection for FileConnection {
    type FavoritesRepository = FavoritesRepository;
    type SettingsRepository = SettingsRepository;

    fn create_favorites_repository(&self) -> FavoritesRepository {
        FavoritesRepository::new(self.clone())
    }

    fn create_settings_repository(&self) -> SettingsRepository {
        SettingsRepository::new(self.clone())
    }
}
