//! Deterministic daily quest selection.
//!
//! Quests must not reshuffle when the UI re-renders, so "random" selection
//! is seeded from the calendar date: the same date always produces the same
//! ordered quest list. The seed comes from [`date_seed`], a deliberately
//! simple polynomial string hash; the hash itself is part of the contract
//! because users see yesterday's quests change if it changes.

use chrono::NaiveDate;
use log::debug;

use crate::domain::content::{BATTLE_QUEST_POOL, DAILY_QUEST_POOL};
use crate::domain::models::quest::{Quest, QuestKind};

/// Step between candidate pool indices for one selection walk. Pool sizes
/// are chosen coprime with this (see `domain::content::quests`).
const SELECTION_STEP: usize = 7;

/// Hash a `YYYY-MM-DD` date string into a deterministic u32 seed.
///
/// `Σ char_code(c) * 31^position` with wrapping arithmetic. Exposed as a
/// free function so the hash is testable apart from selection.
pub fn date_seed(date: &str) -> u32 {
    date.chars().enumerate().fold(0u32, |seed, (position, c)| {
        seed.wrapping_add((c as u32).wrapping_mul(31u32.wrapping_pow(position as u32)))
    })
}

/// Service that picks the day's quests from the static pools.
#[derive(Debug, Clone, Default)]
pub struct QuestService;

impl QuestService {
    pub fn new() -> Self {
        Self
    }

    /// Select `count` distinct quests from the daily pool for `date`.
    ///
    /// Walks candidate indices `(seed + i * step) % pool_len`, skipping ones
    /// already chosen, until `min(count, pool_len)` quests are collected.
    /// The walk gives up after `2 * pool_len` attempts; with the pool length
    /// coprime to the step this budget always suffices.
    ///
    /// Deterministic: identical `(date, count)` arguments yield an identical
    /// ordered sequence.
    pub fn daily_quests(&self, date: NaiveDate, count: usize) -> Vec<&'static Quest> {
        self.select_from_pool(DAILY_QUEST_POOL, date, count)
    }

    /// The battle screen's quest board for `date`.
    ///
    /// A distinct, simpler policy than [`daily_quests`](Self::daily_quests):
    /// the two fixed automatic quests (pool indices 0 and 1) plus one seeded
    /// pick from the manual-only subset.
    pub fn quest_board(&self, date: NaiveDate) -> Vec<&'static Quest> {
        let mut board = vec![&BATTLE_QUEST_POOL[0], &BATTLE_QUEST_POOL[1]];

        let manual: Vec<&'static Quest> = BATTLE_QUEST_POOL
            .iter()
            .filter(|quest| quest.kind == QuestKind::Manual)
            .collect();
        if !manual.is_empty() {
            let seed = date_seed(&Self::format_date(date)) as usize;
            board.push(manual[seed % manual.len()]);
        }

        debug!("Quest board for {}: {:?}", date, board.iter().map(|q| q.id).collect::<Vec<_>>());
        board
    }

    fn select_from_pool(
        &self,
        pool: &'static [Quest],
        date: NaiveDate,
        count: usize,
    ) -> Vec<&'static Quest> {
        if pool.is_empty() || count == 0 {
            return Vec::new();
        }

        let seed = date_seed(&Self::format_date(date)) as usize;
        let target = count.min(pool.len());
        let mut chosen_indices: Vec<usize> = Vec::with_capacity(target);
        let mut quests: Vec<&'static Quest> = Vec::with_capacity(target);

        let mut attempt = 0;
        while quests.len() < target && attempt < pool.len() * 2 {
            let index = (seed + attempt * SELECTION_STEP) % pool.len();
            if !chosen_indices.contains(&index) {
                chosen_indices.push(index);
                quests.push(&pool[index]);
            }
            attempt += 1;
        }

        debug!(
            "Daily quests for {}: {:?}",
            date,
            quests.iter().map(|q| q.id).collect::<Vec<_>>()
        );
        quests
    }

    /// Canonical local-calendar date key used for seeding.
    fn format_date(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}
