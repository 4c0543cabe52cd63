//! # Static Game Content
//!
//! The read-only catalogs the derivation services select from: monsters,
//! weapons, quest pools, and the waka poetry calendar. Everything here is
//! `'static` data fixed at compile time; nothing is ever mutated at runtime,
//! so the catalogs are safe to share freely across the process lifetime.
//!
//! Catalog invariants the services rely on:
//!
//! - `MONSTERS` ends with the idle fallback (empty keyword list), so monster
//!   selection is total.
//! - `DAILY_QUEST_POOL` has 10 entries; 10 is coprime with the selection
//!   step 7, so the seeded walk reaches every index within its attempt
//!   budget.
//! - `BATTLE_QUEST_POOL` starts with its two automatic quests, followed by
//!   the manual-only subset.
//! - `WAKA_CALENDAR` is non-empty and ordered by (month, day).

pub mod monsters;
pub mod quests;
pub mod waka_calendar;
pub mod weapons;

pub use monsters::MONSTERS;
pub use quests::{BATTLE_QUEST_POOL, DAILY_QUEST_POOL};
pub use waka_calendar::WAKA_CALENDAR;
pub use weapons::WEAPONS;
