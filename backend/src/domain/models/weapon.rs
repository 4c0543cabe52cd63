//! Domain model for craftable weapons in the shard shop.

use serde::Serialize;
use shared::ShardCounts;

/// Stat bonus a crafted weapon grants. Components default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct StatBonus {
    pub hp: u32,
    pub mp: u32,
    pub def: u32,
}

/// A craftable weapon.
///
/// `cost` reuses [`ShardCounts`] as a partial cost vector: shard kinds the
/// weapon does not require are simply 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Weapon {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: ShardCounts,
    pub bonus: StatBonus,
}
