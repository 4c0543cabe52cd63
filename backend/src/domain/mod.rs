//! # Domain Module
//!
//! The game derivation logic: every service here is a pure function of the
//! ledger records handed to it (plus, for favorites and cycle settings, an
//! injected storage port). Nothing persists game state; monsters, quests,
//! shards, and moods are recomputed from inputs on every read.
//!
//! ## Module Organization
//!
//! - **battle_service**: top spending category → monster → remaining HP
//! - **forge_service**: shard accounting and weapon crafting rules
//! - **quest_service**: date-seeded deterministic quest selection
//! - **cycle_service**: cycle mood derivation for the calendar widget
//! - **waka_service**: poem-of-the-day picking and favorites
//! - **content**: the static catalogs the services select from
//! - **models**: domain entities and user-configured settings
//!
//! ## Design Principles
//!
//! - **Derived, never stored**: battle and shard state cannot drift because
//!   it is recomputed from the record history each time
//! - **Fallbacks over failures**: business conditions (no spending, no
//!   matching poem) map to defined fallback values so the UI always renders
//! - **Storage agnostic**: persistence goes through `storage::traits` ports

pub mod battle_service;
pub mod content;
pub mod cycle_service;
pub mod forge_service;
pub mod models;
pub mod quest_service;
pub mod waka_service;

pub use battle_service::{BattleService, DEFAULT_CATEGORY};
pub use cycle_service::CycleService;
pub use forge_service::ForgeService;
pub use quest_service::{date_seed, QuestService};
pub use waka_service::WakaService;
