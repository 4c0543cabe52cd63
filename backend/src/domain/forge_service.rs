//! Shard accounting and weapon crafting rules.

use log::debug;
use shared::{DayStatusRecord, InstallmentRecord, ShardCounts, TransactionRecord};

use crate::domain::content::WEAPONS;
use crate::domain::models::weapon::Weapon;

/// Transactions recorded per record shard.
const TRANSACTIONS_PER_RECORD_SHARD: u32 = 5;
/// No-spend days per discipline shard.
const NO_SPEND_DAYS_PER_DISCIPLINE_SHARD: u32 = 2;

/// Service that derives crafting currency from behavioral counts and
/// answers affordability questions against the weapon catalog.
#[derive(Debug, Clone, Default)]
pub struct ForgeService;

impl ForgeService {
    pub fn new() -> Self {
        Self
    }

    /// Derive the three shard balances from the full record history.
    ///
    /// Three independent counting reductions, recomputed from scratch on
    /// every call (no incremental updates to drift out of sync):
    /// - record shards: one per 5 transactions of any kind,
    /// - discipline shards: one per 2 no-spend days,
    /// - repay shards: one per fully repaid installment.
    pub fn compute_shards(
        &self,
        transactions: &[TransactionRecord],
        day_statuses: &[DayStatusRecord],
        installments: &[InstallmentRecord],
    ) -> ShardCounts {
        let no_spend_days = day_statuses.iter().filter(|day| day.is_no_spend).count() as u32;
        let repaid = installments
            .iter()
            .filter(|installment| installment.is_fully_repaid())
            .count() as u32;

        let shards = ShardCounts {
            record_shard: transactions.len() as u32 / TRANSACTIONS_PER_RECORD_SHARD,
            discipline_shard: no_spend_days / NO_SPEND_DAYS_PER_DISCIPLINE_SHARD,
            repay_shard: repaid,
        };
        debug!("Computed shards: {:?}", shards);
        shards
    }

    /// True when every cost component of `weapon` is covered by `shards`.
    ///
    /// Pure check; crafting itself (deducting shards, granting the weapon)
    /// is the host app's concern.
    pub fn can_craft(&self, weapon: &Weapon, shards: &ShardCounts) -> bool {
        shards.record_shard >= weapon.cost.record_shard
            && shards.discipline_shard >= weapon.cost.discipline_shard
            && shards.repay_shard >= weapon.cost.repay_shard
    }

    /// Catalog entries affordable with the given shard balances, in catalog
    /// order. Feeds the shop list in the presentation layer.
    pub fn craftable_weapons(&self, shards: &ShardCounts) -> Vec<&'static Weapon> {
        WEAPONS.iter().filter(|weapon| self.can_craft(weapon, shards)).collect()
    }
}
