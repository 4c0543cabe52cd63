//! Domain model for a spending monster.

use serde::Serialize;

/// A monster bound to a family of discretionary spending categories.
///
/// Monsters are static catalog entries; battle state (remaining HP) is never
/// stored on the monster but derived from the current no-spend-day count on
/// every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monster {
    pub id: &'static str,
    pub name: &'static str,
    /// Flavor text shown on the battle card.
    pub description: &'static str,
    /// Habit tip shown under the battle card.
    pub tip: &'static str,
    /// Asset identifier for the monster illustration. Resolving this into
    /// actual media is the presentation layer's job.
    pub image: &'static str,
    pub max_hp: u32,
    /// Display label for the category family this monster represents,
    /// or `"any"` for the idle fallback.
    pub target_category: &'static str,
    /// Substring keywords matched (case-sensitively) against the top
    /// spending category. Empty for the idle fallback.
    pub keywords: &'static [&'static str],
}

impl Monster {
    /// True when `category` contains any of this monster's keywords.
    pub fn matches_category(&self, category: &str) -> bool {
        self.keywords.iter().any(|keyword| category.contains(keyword))
    }
}
