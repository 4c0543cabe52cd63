//! Poem-of-the-day selection and favorites.
//!
//! Selection reads the static calendar; favorites go through the injected
//! [`FavoritesStorage`] port so the service never names a concrete store.
//! Favorites persistence is deliberately forgiving: unreadable state loads
//! as an empty set and failed writes are logged and swallowed, because a
//! broken favorites file must never take down the poetry widget.

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use rand::Rng;

use crate::domain::content::WAKA_CALENDAR;
use crate::domain::models::waka::{WakaEntry, WakaError};
use crate::storage::traits::FavoritesStorage;

/// Service for the waka calendar widget.
#[derive(Debug, Clone)]
pub struct WakaService<F: FavoritesStorage> {
    favorites: F,
}

impl<F: FavoritesStorage> WakaService<F> {
    pub fn new(favorites: F) -> Self {
        Self { favorites }
    }

    /// The poem for `today`: exact (month, day) match against the calendar,
    /// falling back to the first catalog entry. Total, the catalog is
    /// non-empty by construction.
    pub fn today_entry(&self, today: NaiveDate) -> &'static WakaEntry {
        WAKA_CALENDAR
            .iter()
            .find(|entry| entry.month == today.month() && entry.day == today.day())
            .unwrap_or(&WAKA_CALENDAR[0])
    }

    /// A uniformly random poem from the whole calendar.
    pub fn random_entry(&self) -> Result<&'static WakaEntry, WakaError> {
        Self::pick_uniform(WAKA_CALENDAR)
    }

    /// A uniformly random poem carrying the mood `tag`, falling back to the
    /// whole calendar when no poem has that tag.
    pub fn entry_for_mood(&self, tag: &str) -> Result<&'static WakaEntry, WakaError> {
        let tagged: Vec<&'static WakaEntry> =
            WAKA_CALENDAR.iter().filter(|entry| entry.has_tag(tag)).collect();
        if tagged.is_empty() {
            debug!("No waka tagged '{}', falling back to the full calendar", tag);
            return self.random_entry();
        }
        let index = rand::thread_rng().gen_range(0..tagged.len());
        Ok(tagged[index])
    }

    /// Whether `id` is in the persisted favorites set.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.load_favorites().iter().any(|favorite| favorite == id)
    }

    /// Flip the favorite state of `id` and persist the result best-effort.
    /// Returns the new state (true = now a favorite).
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let mut ids = self.load_favorites();
        let now_favorite = match ids.iter().position(|favorite| favorite == id) {
            Some(position) => {
                ids.remove(position);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        };

        // Best-effort write: a failed save loses nothing but the toggle.
        if let Err(e) = self.favorites.save(&ids) {
            warn!("Failed to persist favorites: {}", e);
        }
        now_favorite
    }

    /// Favorited poems in calendar order.
    pub fn list_favorites(&self) -> Vec<&'static WakaEntry> {
        let ids = self.load_favorites();
        WAKA_CALENDAR
            .iter()
            .filter(|entry| ids.iter().any(|id| id == entry.id))
            .collect()
    }

    fn load_favorites(&self) -> Vec<String> {
        match self.favorites.load() {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Failed to load favorites, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn pick_uniform(
        entries: &'static [WakaEntry],
    ) -> Result<&'static WakaEntry, WakaError> {
        if entries.is_empty() {
            return Err(WakaError::EmptyCatalog);
        }
        let index = rand::thread_rng().gen_range(0..entries.len());
        Ok(&entries[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::sync::Mutex;

    /// In-memory favorites store; `poisoned` simulates an unreadable or
    /// unwritable backing file.
    #[derive(Debug, Default)]
    struct MemoryFavorites {
        ids: Mutex<Vec<String>>,
        poisoned: bool,
    }

    impl FavoritesStorage for MemoryFavorites {
        fn load(&self) -> Result<Vec<String>> {
            if self.poisoned {
                anyhow::bail!("simulated corrupt store");
            }
            Ok(self.ids.lock().unwrap().clone())
        }

        fn save(&self, ids: &[String]) -> Result<()> {
            if self.poisoned {
                anyhow::bail!("simulated write failure");
            }
            *self.ids.lock().unwrap() = ids.to_vec();
            Ok(())
        }
    }

    fn service() -> WakaService<MemoryFavorites> {
        WakaService::new(MemoryFavorites::default())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_entry_matches_month_and_day() {
        let service = service();
        let entry = service.today_entry(date(2024, 12, 1));
        assert_eq!(entry.id, "december-01");
        assert_eq!((entry.month, entry.day), (12, 1));
    }

    #[test]
    fn test_today_entry_falls_back_to_first() {
        let service = service();
        // No entry exists for the 3rd of any month.
        let entry = service.today_entry(date(2024, 12, 3));
        assert_eq!(entry.id, WAKA_CALENDAR[0].id);
    }

    #[test]
    fn test_random_entry_comes_from_catalog() {
        let service = service();
        for _ in 0..10 {
            let entry = service.random_entry().unwrap();
            assert!(WAKA_CALENDAR.iter().any(|e| e.id == entry.id));
        }
    }

    #[test]
    fn test_entry_for_mood_respects_tag() {
        let service = service();
        for _ in 0..10 {
            let entry = service.entry_for_mood("moon").unwrap();
            assert!(entry.has_tag("moon"));
        }
    }

    #[test]
    fn test_entry_for_unknown_mood_falls_back() {
        let service = service();
        assert!(service.entry_for_mood("no-such-mood").is_ok());
    }

    #[test]
    fn test_toggle_favorite_round_trip() {
        // Toggling on an empty store, then toggling the same id again.
        let service = service();
        assert!(!service.is_favorite("december-01"));

        assert!(service.toggle_favorite("december-01"));
        assert!(service.is_favorite("december-01"));

        assert!(!service.toggle_favorite("december-01"));
        assert!(!service.is_favorite("december-01"));
    }

    #[test]
    fn test_list_favorites_in_calendar_order() {
        let service = service();
        service.toggle_favorite("december-01");
        service.toggle_favorite("january-15");
        service.toggle_favorite("may-01");

        let ids: Vec<&str> = service.list_favorites().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["january-15", "may-01", "december-01"]);
    }

    #[test]
    fn test_poisoned_store_reads_as_empty_and_never_panics() {
        let service = WakaService::new(MemoryFavorites {
            ids: Mutex::new(vec!["january-01".to_string()]),
            poisoned: true,
        });
        assert!(!service.is_favorite("january-01"));
        assert!(service.list_favorites().is_empty());
        // Toggle still reports the in-memory outcome even though the save
        // was dropped.
        assert!(service.toggle_favorite("march-01"));
    }
}
