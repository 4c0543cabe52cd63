//! # Storage Module
//!
//! Persistence for the little user state the game layer owns: the waka
//! favorites set and the cycle settings. Everything else the services
//! consume (transactions, day statuses, installments) belongs to the host
//! finance tracker and arrives as read-only input.
//!
//! The domain depends on the traits in [`traits`]; the [`file`] module is
//! the shipped implementation (plain files under a data directory, written
//! atomically via temp files).

pub mod file;
pub mod traits;

pub use file::FileConnection;
pub use traits::{Connection, CycleSettingsStorage, FavoritesStorage};
