//! Domain model for daily quests.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestDifficulty {
    Easy,
    Normal,
    Hard,
}

/// How a quest completes.
///
/// `Auto` quests are checked off by the app from ledger data; `Manual`
/// quests are ticked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Auto,
    Manual,
}

/// A quest pool entry. Pools are static; which entries surface on a given
/// day is decided by the seeded selection in `QuestService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quest {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: QuestDifficulty,
    pub kind: QuestKind,
}
