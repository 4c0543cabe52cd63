//! # Spend Quest Backend
//!
//! The gamification core of the Spend Quest finance tracker: ledger records
//! (transactions, day statuses, installments) go in, game state (monster
//! battles, daily quests, crafting shards, the cycle mood, the poem of the
//! day) comes out. All derivation is synchronous and pure; the only state
//! this crate persists is the waka favorites set and the cycle settings,
//! behind the ports in [`storage::traits`].
//!
//! Presentation is a separate concern: services return plain values and
//! asset identifier strings, never rendered output.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use shared::CycleStatus;
use std::path::Path;

pub mod domain;
pub mod storage;

pub use storage::file::FileConnection;

use domain::{BattleService, CycleService, ForgeService, QuestService, WakaService};
use storage::file::{FavoritesRepository, SettingsRepository};
use storage::traits::{Connection, CycleSettingsStorage};

/// Main backend struct that wires all services over a file connection.
pub struct Backend {
    pub battle_service: BattleService,
    pub forge_service: ForgeService,
    pub quest_service: QuestService,
    pub cycle_service: CycleService,
    pub waka_service: WakaService<FavoritesRepository>,
    pub settings_repository: SettingsRepository,
}

impl Backend {
    /// Create a backend with its data directory at `data_dir`.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = FileConnection::new(data_dir)?;
        info!("Spend Quest backend using data directory {:?}", connection.base_directory());

        Ok(Self {
            battle_service: BattleService::new(),
            forge_service: ForgeService::new(),
            quest_service: QuestService::new(),
            cycle_service: CycleService::new(),
            waka_service: WakaService::new(connection.create_favorites_repository()),
            settings_repository: connection.create_settings_repository(),
        })
    }

    /// Evaluate the cycle mood for `today` from the persisted settings.
    pub fn cycle_status(&self, today: NaiveDate) -> Result<CycleStatus> {
        let settings = self.settings_repository.get_settings()?;
        Ok(self.cycle_service.cycle_status(today, &settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CycleMode, DayStatusRecord, RecordKind, TransactionRecord};
    use tempfile::TempDir;

    fn backend() -> (Backend, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let backend = Backend::new(temp_dir.path()).unwrap();
        (backend, temp_dir)
    }

    #[test]
    fn test_backend_wires_favorites_through_files() {
        let (backend, temp_dir) = backend();

        assert!(backend.waka_service.toggle_favorite("december-01"));
        assert!(backend.waka_service.is_favorite("december-01"));
        assert!(temp_dir.path().join("favorites.json").exists());

        // A fresh backend over the same directory sees the persisted set.
        let reopened = Backend::new(temp_dir.path()).unwrap();
        assert!(reopened.waka_service.is_favorite("december-01"));
    }

    #[test]
    fn test_backend_cycle_status_defaults_to_normal() {
        let (backend, _temp_dir) = backend();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let status = backend.cycle_status(today).unwrap();
        assert_eq!(status.mode, CycleMode::Normal);
        assert_eq!(status.days_from_last, None);
    }

    #[test]
    fn test_end_to_end_battle_derivation() {
        let (backend, _temp_dir) = backend();

        let transactions = vec![TransactionRecord {
            kind: RecordKind::Expense,
            is_essential: false,
            category: Some("배달/외식".to_string()),
            amount: 30000.0,
        }];
        let day_statuses =
            vec![DayStatusRecord { date: None, is_no_spend: true }; 3];

        let state = backend.battle_service.battle_state(&transactions, &day_statuses);
        assert_eq!(state.monster_id, "delivery-imp");
        assert_eq!(state.current_hp, 7);
    }
}
