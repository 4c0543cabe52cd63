//! The weapon catalog for the shard shop.

use crate::domain::models::weapon::{StatBonus, Weapon};
use shared::ShardCounts;

pub const WEAPONS: &[Weapon] = &[
    Weapon {
        id: "wooden-ledger-sword",
        name: "기록의 목검",
        cost: ShardCounts { record_shard: 2, discipline_shard: 0, repay_shard: 0 },
        bonus: StatBonus { hp: 5, mp: 0, def: 0 },
    },
    Weapon {
        id: "discipline-shield",
        name: "절제의 방패",
        cost: ShardCounts { record_shard: 0, discipline_shard: 3, repay_shard: 0 },
        bonus: StatBonus { hp: 0, mp: 0, def: 3 },
    },
    Weapon {
        id: "repayment-hammer",
        name: "상환의 망치",
        cost: ShardCounts { record_shard: 1, discipline_shard: 0, repay_shard: 1 },
        bonus: StatBonus { hp: 2, mp: 0, def: 2 },
    },
    Weapon {
        id: "frugal-staff",
        name: "절약의 지팡이",
        cost: ShardCounts { record_shard: 3, discipline_shard: 2, repay_shard: 1 },
        bonus: StatBonus { hp: 0, mp: 5, def: 1 },
    },
];
