//! # File Storage Module
//!
//! Plain-file implementations of the storage ports: one JSON file for the
//! favorites set, one YAML file for the cycle settings, both under a single
//! data directory and written atomically (temp file + rename).
//!
//! ## File Layout
//!
//! ```text
//! data/
//! ├── favorites.json       ← waka favorites (JSON array of entry ids)
//! └── cycle_settings.yaml  ← user cycle configuration
//! ```

pub mod connection;
pub mod favorites_repository;
pub mod settings_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::FileConnection;
pub use favorites_repository::FavoritesRepository;
pub use settings_repository::SettingsRepository;
