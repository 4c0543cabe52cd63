//! # Storage Traits
//!
//! Ports between the domain services and whatever actually persists user
//! state. The derivation services only ever see these traits, so any
//! key-value backend (files, browser storage, an in-memory map in tests)
//! can stand in without touching domain code.

use anyhow::Result;

use crate::domain::models::cycle::CycleSettings;

/// Persistence port for the waka favorites id set.
///
/// The persisted representation is an ordered list of entry ids; the domain
/// treats it as a set. Implementations must load missing or corrupt state
/// as the empty list rather than failing.
pub trait FavoritesStorage: Send + Sync {
    /// Load the persisted favorite ids.
    fn load(&self) -> Result<Vec<String>>;

    /// Replace the persisted favorite ids.
    fn save(&self, ids: &[String]) -> Result<()>;
}

/// Persistence port for the user's cycle configuration.
pub trait CycleSettingsStorage: Send + Sync {
    /// Load the settings, or defaults when none were saved yet.
    fn get_settings(&self) -> Result<CycleSettings>;

    /// Persist the settings.
    fn set_settings(&self, settings: &CycleSettings) -> Result<()>;
}

/// Factory trait for storage connections.
///
/// Abstracts the concrete backend so the `Backend` wiring can work with any
/// implementation that can hand out repositories.
pub trait Connection: Send + Sync + Clone {
    /// The favorites repository type this connection creates.
    type FavoritesRepository: FavoritesStorage;

    /// The settings repository type this connection creates.
    type SettingsRepository: CycleSettingsStorage;

    /// Create a favorites repository for this connection.
    fn create_favorites_repository(&self) -> Self::FavoritesRepository;

    /// Create a cycle settings repository for this connection.
    fn create_settings_repository(&self) -> Self::SettingsRepository;
}
