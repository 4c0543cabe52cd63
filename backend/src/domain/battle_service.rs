//! Battle derivation logic: spending category aggregation, monster
//! selection, and HP computation.
//!
//! Nothing here is stored. The battle view is a pure function of the current
//! ledger: editing day statuses retroactively "heals" the monster, which is
//! intentional (no persisted battle state to migrate or corrupt).

use std::collections::HashMap;

use log::debug;
use shared::{BattleState, DayStatusRecord, RecordKind, TransactionRecord};

use crate::domain::content::MONSTERS;
use crate::domain::models::monster::Monster;

/// Bucket that uncategorized discretionary expenses fold into.
pub const DEFAULT_CATEGORY: &str = "기타";

/// Service that derives the monster battle view from ledger records.
#[derive(Debug, Clone, Default)]
pub struct BattleService;

impl BattleService {
    pub fn new() -> Self {
        Self
    }

    /// Find the discretionary spending category with the largest summed
    /// amount.
    ///
    /// Only non-essential expense records qualify. Records without a
    /// category (or with an empty one) count toward [`DEFAULT_CATEGORY`].
    /// Ties break toward the category first encountered in scan order, so
    /// the result is stable for a given record ordering. Returns `None`
    /// when no record qualifies.
    pub fn top_discretionary_category(
        &self,
        transactions: &[TransactionRecord],
    ) -> Option<String> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        // Scan order of first appearance, for the stable tie-break.
        let mut seen_order: Vec<&str> = Vec::new();

        for tx in transactions {
            if tx.kind != RecordKind::Expense || tx.is_essential {
                continue;
            }
            let category = match tx.category.as_deref() {
                Some(c) if !c.is_empty() => c,
                _ => DEFAULT_CATEGORY,
            };
            if !totals.contains_key(category) {
                seen_order.push(category);
            }
            *totals.entry(category).or_insert(0.0) += tx.amount;
        }

        let mut best: Option<(&str, f64)> = None;
        for category in seen_order {
            let total = totals[category];
            match best {
                // Strictly greater wins; equal keeps the earlier category.
                Some((_, best_total)) if total <= best_total => {}
                _ => best = Some((category, total)),
            }
        }

        let result = best.map(|(category, _)| category.to_string());
        debug!("Top discretionary category: {:?}", result);
        result
    }

    /// Map a spending category to its monster.
    ///
    /// Total function: keyword matching runs in catalog order
    /// (delivery/dining, shopping, café/snack) and anything unmatched,
    /// including `None`, yields the idle fallback.
    pub fn select_monster(&self, category: Option<&str>) -> &'static Monster {
        let monster = match category {
            Some(c) => MONSTERS
                .iter()
                .find(|monster| monster.matches_category(c))
                .unwrap_or_else(|| Self::idle_monster()),
            None => Self::idle_monster(),
        };
        debug!("Selected monster {} for category {:?}", monster.id, category);
        monster
    }

    /// Remaining HP after grinding the monster down with no-spend days.
    ///
    /// `max(0, max_hp - no_spend_days)`; the `u32` parameter encodes the
    /// non-negative-integer contract on the day count.
    pub fn current_hp(&self, monster: &Monster, no_spend_days: u32) -> u32 {
        monster.max_hp.saturating_sub(no_spend_days)
    }

    /// Derive the full battle view in one pass: aggregate the ledger, pick
    /// the monster, and compute its remaining HP from the no-spend days.
    pub fn battle_state(
        &self,
        transactions: &[TransactionRecord],
        day_statuses: &[DayStatusRecord],
    ) -> BattleState {
        let category = self.top_discretionary_category(transactions);
        let monster = self.select_monster(category.as_deref());
        let no_spend_days = day_statuses.iter().filter(|day| day.is_no_spend).count() as u32;
        let current_hp = self.current_hp(monster, no_spend_days);

        debug!(
            "⚔️ Battle state: {} {}/{} HP ({} no-spend days)",
            monster.id, current_hp, monster.max_hp, no_spend_days
        );

        BattleState {
            category,
            monster_id: monster.id.to_string(),
            max_hp: monster.max_hp,
            current_hp,
            defeated: current_hp == 0,
        }
    }

    // The catalog keeps the idle fallback last; its keyword list is empty so
    // it never matches by substring.
    fn idle_monster() -> &'static Monster {
        &MONSTERS[MONSTERS.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: f64) -> TransactionRecord {
        TransactionRecord {
            kind: RecordKind::Expense,
            is_essential: false,
            category: Some(category.to_string()),
            amount,
        }
    }

    fn no_spend_day() -> DayStatusRecord {
        DayStatusRecord { date: None, is_no_spend: true }
    }

    #[test]
    fn test_top_category_picks_largest_sum() {
        let service = BattleService::new();
        let transactions = vec![
            expense("카페/간식", 4500.0),
            expense("배달/외식", 18000.0),
            expense("카페/간식", 5200.0),
            expense("배달/외식", 12000.0),
        ];
        assert_eq!(
            service.top_discretionary_category(&transactions),
            Some("배달/외식".to_string())
        );
    }

    #[test]
    fn test_top_category_ignores_essential_and_non_expense() {
        let service = BattleService::new();
        let mut essential = expense("주거/통신", 500000.0);
        essential.is_essential = true;
        let income = TransactionRecord {
            kind: RecordKind::Income,
            category: Some("급여".to_string()),
            amount: 2000000.0,
            ..Default::default()
        };
        assert_eq!(service.top_discretionary_category(&[essential, income]), None);
    }

    #[test]
    fn test_top_category_ties_break_to_first_seen() {
        let service = BattleService::new();
        let transactions = vec![expense("쇼핑", 10000.0), expense("카페/간식", 10000.0)];
        assert_eq!(service.top_discretionary_category(&transactions), Some("쇼핑".to_string()));
    }

    #[test]
    fn test_missing_category_folds_into_default_bucket() {
        let service = BattleService::new();
        let uncategorized = TransactionRecord {
            kind: RecordKind::Expense,
            amount: 9000.0,
            ..Default::default()
        };
        let blank = TransactionRecord {
            kind: RecordKind::Expense,
            category: Some(String::new()),
            amount: 1000.0,
            ..Default::default()
        };
        assert_eq!(
            service.top_discretionary_category(&[uncategorized, blank]),
            Some(DEFAULT_CATEGORY.to_string())
        );
    }

    #[test]
    fn test_select_monster_is_total() {
        let service = BattleService::new();
        assert_eq!(service.select_monster(Some("배달/외식")).id, "delivery-imp");
        assert_eq!(service.select_monster(Some("온라인 쇼핑")).id, "impulse-golem");
        assert_eq!(service.select_monster(Some("카페/간식")).id, "caffeine-slime");
        assert_eq!(service.select_monster(Some("완전히 모르는 분류")).id, "idle-spirit");
        assert_eq!(service.select_monster(None).id, "idle-spirit");
    }

    #[test]
    fn test_current_hp_never_negative_and_monotone() {
        let service = BattleService::new();
        let monster = service.select_monster(Some("배달/외식"));
        assert_eq!(service.current_hp(monster, 0), monster.max_hp);
        let mut previous = u32::MAX;
        for days in 0..20 {
            let hp = service.current_hp(monster, days);
            assert!(hp <= previous);
            previous = hp;
        }
        assert_eq!(service.current_hp(monster, 1000), 0);
    }

    #[test]
    fn test_battle_state_scenario() {
        // One 30,000 delivery expense and 3 no-spend days.
        let service = BattleService::new();
        let transactions = vec![expense("배달/외식", 30000.0)];
        let day_statuses = vec![no_spend_day(), no_spend_day(), no_spend_day()];

        let state = service.battle_state(&transactions, &day_statuses);
        assert_eq!(state.category.as_deref(), Some("배달/외식"));
        assert_eq!(state.monster_id, "delivery-imp");
        assert_eq!(state.max_hp, 10);
        assert_eq!(state.current_hp, 7);
        assert!(!state.defeated);
    }

    #[test]
    fn test_empty_ledger_yields_idle_monster() {
        let service = BattleService::new();
        let state = service.battle_state(&[], &[]);
        assert_eq!(state.category, None);
        assert_eq!(state.monster_id, "idle-spirit");
        assert_eq!(state.current_hp, state.max_hp);
    }
}
