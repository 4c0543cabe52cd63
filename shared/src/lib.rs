//! Shared types for the Spend Quest gamification core.
//!
//! This crate holds the data contracts that cross the boundary between the
//! host finance tracker and the game derivation layer:
//!
//! - Input records (`TransactionRecord`, `DayStatusRecord`,
//!   `InstallmentRecord`) as they arrive from the ledger store. These are
//!   deliberately tolerant: every optional field carries a serde default so
//!   sparse or legacy records deserialize instead of failing (amount → 0,
//!   category → none, flags → false).
//! - Derived value objects (`ShardCounts`, `CycleStatus`, `BattleState`)
//!   produced by the backend services and consumed by the presentation layer.
//!
//! Derived values are recomputed from the full input collections on every
//! read; nothing in this crate represents stored game state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of a ledger record.
///
/// The ledger JSON uses lowercase string tags. Anything that is not a known
/// tag folds into `Other` rather than failing deserialization, so new record
/// kinds in the host app never break the game layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Expense,
    Income,
    #[serde(other)]
    #[default]
    Other,
}

/// A single ledger transaction as supplied by the host app.
///
/// The collection is treated as a multiset: no uniqueness or ordering
/// invariant is imposed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Record kind; only `Expense` entries participate in battle derivation.
    #[serde(rename = "type", default)]
    pub kind: RecordKind,
    /// Whether the user marked this spending as essential.
    #[serde(default)]
    pub is_essential: bool,
    /// Spending category label; `None` or empty folds into the default
    /// bucket during aggregation.
    #[serde(default)]
    pub category: Option<String>,
    /// Transaction amount in the ledger currency. Missing amounts count as 0.
    #[serde(default)]
    pub amount: f64,
}

/// Per-day status flag from the calendar.
///
/// Callers must supply one logical entry per calendar day; the core counts
/// entries and never validates date uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DayStatusRecord {
    /// Calendar day this status belongs to, when the host app recorded one.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// True when the day closed with zero discretionary spending.
    #[serde(default)]
    pub is_no_spend: bool,
}

/// An installment (planned repayment) record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentRecord {
    /// Amount repaid so far.
    #[serde(default)]
    pub paid_amount: f64,
    /// Total amount owed. Zero or negative totals never count as repaid.
    #[serde(default)]
    pub total_amount: f64,
}

impl InstallmentRecord {
    /// True when the installment is fully repaid: `paid >= total > 0`.
    pub fn is_fully_repaid(&self) -> bool {
        self.total_amount > 0.0 && self.paid_amount >= self.total_amount
    }
}

/// Crafting currency balances derived from behavioral counts.
///
/// Always recomputed from the full record collections; see
/// `ForgeService::compute_shards` for the derivation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShardCounts {
    /// Earned by keeping ledger records (1 per 5 transactions).
    pub record_shard: u32,
    /// Earned by no-spend days (1 per 2 days).
    pub discipline_shard: u32,
    /// Earned by fully repaying installments (1 each).
    pub repay_shard: u32,
}

/// Mood mode for the cycle calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleMode {
    Normal,
    Pms,
    Rest,
}

/// Derived cycle status for a given day.
///
/// Both day offsets are `None` when the mode was forced manually or the
/// settings were incomplete; `days_from_last` may be negative when the
/// configured reference date lies in the future (caller data-entry error,
/// reported rather than rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleStatus {
    pub mode: CycleMode,
    pub days_from_last: Option<i64>,
    pub days_to_next: Option<i64>,
}

/// One-shot battle view derived from the current ledger state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    /// Top discretionary spending category, if any spending qualified.
    pub category: Option<String>,
    /// Id of the monster the category mapped to.
    pub monster_id: String,
    pub max_hp: u32,
    pub current_hp: u32,
    /// True once no-spend days have ground the monster down to 0 HP.
    pub defeated: bool,
}
