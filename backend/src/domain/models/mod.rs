//! Domain entities for the game layer.
//!
//! Static catalog entities (monsters, weapons, quests, waka poems) are plain
//! `'static` data: they are defined once in `domain::content` and never
//! mutated at runtime. User-configured state (cycle settings) lives here too
//! because it round-trips through storage.

pub mod cycle;
pub mod monster;
pub mod quest;
pub mod waka;
pub mod weapon;
