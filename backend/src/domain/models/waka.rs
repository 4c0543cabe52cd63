//! Domain model for the waka poetry calendar.

use serde::Serialize;

/// A poem-of-the-day entry, keyed by calendar (month, day).
///
/// The catalog in `domain::content` is a fixed ordered sequence; lookup is by
/// exact (month, day) match with the first entry as the defined fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WakaEntry {
    /// Stable id, also the favorites key. Format: `"<month-name>-<day>"`,
    /// e.g. `"december-01"`.
    pub id: &'static str,
    pub month: u32,
    pub day: u32,
    /// Original text of the poem.
    pub content: &'static str,
    /// Korean translation shown alongside the original.
    pub translation: &'static str,
    /// Mood tags used by `WakaService::entry_for_mood`.
    pub tags: &'static [&'static str],
}

impl WakaEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

/// Failures of the waka picker.
///
/// Business conditions (no entry for today, tag with no poems) are fallback
/// values, never errors; only the structurally-impossible empty catalog is.
#[derive(Debug, thiserror::Error)]
pub enum WakaError {
    #[error("waka catalog is empty")]
    EmptyCatalog,
}
