//! # File Settings Repository
//!
//! Persists the user's cycle configuration as `cycle_settings.yaml` under
//! the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! last_period_start: "2024-03-10"
//! cycle_length: 30
//! manual_mode: null
//! ```
//!
//! Unlike favorites, this is deliberate user configuration: a missing file
//! yields defaults, but an unreadable one is surfaced as an error instead
//! of silently wiping the user's settings.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

use super::connection::FileConnection;
use crate::domain::models::cycle::CycleSettings;
use crate::storage::traits::CycleSettingsStorage;

const SETTINGS_FILE: &str = "cycle_settings.yaml";

/// File-backed cycle settings repository.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    connection: FileConnection,
}

impl SettingsRepository {
    pub fn new(connection: FileConnection) -> Self {
        Self { connection }
    }

    fn settings_path(&self) -> PathBuf {
        self.connection.base_directory().join(SETTINGS_FILE)
    }
}

impl CycleSettingsStorage for SettingsRepository {
    fn get_settings(&self) -> Result<CycleSettings> {
        let path = self.settings_path();
        if !path.exists() {
            debug!("No cycle settings at {:?}, using defaults", path);
            return Ok(CycleSettings::default());
        }

        let yaml = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cycle settings {:?}", path))?;
        let settings: CycleSettings = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Failed to parse cycle settings {:?}", path))?;
        Ok(settings)
    }

    fn set_settings(&self, settings: &CycleSettings) -> Result<()> {
        let path = self.settings_path();
        let yaml = serde_yaml::to_string(settings)?;
        self.connection.write_atomic(&path, &yaml)?;
        debug!("Saved cycle settings to {:?}", path);
        Ok(())
    }
}
