//! Cycle mood derivation for the calendar widget.

use chrono::NaiveDate;
use log::debug;
use shared::{CycleMode, CycleStatus};

use crate::domain::models::cycle::CycleSettings;

/// Days from the cycle start that count as the rest window (inclusive).
const REST_WINDOW_DAYS: i64 = 5;
/// Days before the next expected start that count as the PMS window.
const PMS_WINDOW_DAYS: i64 = 7;

/// Service that derives the day's mood mode from cycle settings.
#[derive(Debug, Clone, Default)]
pub struct CycleService;

impl CycleService {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the mood for `today` under `settings`.
    ///
    /// Priority-ordered guard chain; the first matching guard wins:
    ///
    /// 1. A manual mode override returns that mode with both offsets `None`.
    /// 2. Incomplete settings (no start date, unparseable start date, or a
    ///    non-positive cycle length) return `Normal` with both offsets
    ///    `None`. Misconfiguration degrades the widget, it never errors.
    /// 3. A start date in the future returns `Normal` and reports the
    ///    negative `days_from_last` so the UI can surface the entry error.
    /// 4. Otherwise days 0..=5 from the start are `Rest`, the last 7 days of
    ///    the cycle (through day `cycle_length`) are `Pms`, everything else
    ///    is `Normal`.
    ///
    /// For short cycles (length <= 12) the rest and PMS windows overlap;
    /// the rest guard is evaluated first and wins. That precedence is
    /// long-standing app behavior and is preserved as-is.
    pub fn cycle_status(&self, today: NaiveDate, settings: &CycleSettings) -> CycleStatus {
        if let Some(mode) = settings.manual_mode {
            debug!("Cycle mode manually overridden to {:?}", mode);
            return CycleStatus { mode, days_from_last: None, days_to_next: None };
        }

        let cycle_length = match settings.cycle_length {
            Some(length) if length > 0 => length,
            _ => return Self::unconfigured(),
        };
        let last_start = match settings
            .last_period_start
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        {
            Some(date) => date,
            None => return Self::unconfigured(),
        };

        // Whole days between midnight-local dates.
        let diff_days = (today - last_start).num_days();
        if diff_days < 0 {
            // Reference date in the future: data-entry error, not a failure.
            return CycleStatus {
                mode: CycleMode::Normal,
                days_from_last: Some(diff_days),
                days_to_next: None,
            };
        }

        let days_to_next = (cycle_length - diff_days).max(0);
        let mode = if (0..=REST_WINDOW_DAYS).contains(&diff_days) {
            CycleMode::Rest
        } else if diff_days >= cycle_length - PMS_WINDOW_DAYS && diff_days <= cycle_length {
            CycleMode::Pms
        } else {
            CycleMode::Normal
        };

        CycleStatus {
            mode,
            days_from_last: Some(diff_days),
            days_to_next: Some(days_to_next),
        }
    }

    fn unconfigured() -> CycleStatus {
        CycleStatus { mode: CycleMode::Normal, days_from_last: None, days_to_next: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings(start: &str, length: i64) -> CycleSettings {
        CycleSettings {
            last_period_start: Some(start.to_string()),
            cycle_length: Some(length),
            manual_mode: None,
        }
    }

    #[test]
    fn test_manual_mode_overrides_everything() {
        let service = CycleService::new();
        let mut overridden = settings("2024-01-01", 30);
        overridden.manual_mode = Some(CycleMode::Pms);

        let status = service.cycle_status(date(2024, 1, 2), &overridden);
        assert_eq!(status.mode, CycleMode::Pms);
        assert_eq!(status.days_from_last, None);
        assert_eq!(status.days_to_next, None);
    }

    #[test]
    fn test_incomplete_settings_degrade_to_normal() {
        let service = CycleService::new();
        let today = date(2024, 6, 1);

        let empty = CycleSettings::default();
        assert_eq!(service.cycle_status(today, &empty).mode, CycleMode::Normal);

        let unparseable = settings("not-a-date", 30);
        let status = service.cycle_status(today, &unparseable);
        assert_eq!(status.mode, CycleMode::Normal);
        assert_eq!(status.days_from_last, None);

        let zero_length = settings("2024-05-01", 0);
        assert_eq!(service.cycle_status(today, &zero_length).days_to_next, None);
    }

    #[test]
    fn test_cycle_start_today_is_rest() {
        // Day zero of a 30-day cycle.
        let service = CycleService::new();
        let status = service.cycle_status(date(2024, 3, 10), &settings("2024-03-10", 30));
        assert_eq!(status.mode, CycleMode::Rest);
        assert_eq!(status.days_from_last, Some(0));
        assert_eq!(status.days_to_next, Some(30));
    }

    #[test]
    fn test_future_start_reports_negative_offset() {
        let service = CycleService::new();
        let status = service.cycle_status(date(2024, 3, 1), &settings("2024-03-10", 30));
        assert_eq!(status.mode, CycleMode::Normal);
        assert_eq!(status.days_from_last, Some(-9));
        assert_eq!(status.days_to_next, None);
    }

    #[test]
    fn test_mode_windows_across_one_cycle() {
        let service = CycleService::new();
        let config = settings("2024-01-01", 30);

        // Day 5 is the last rest day, day 6 is normal.
        assert_eq!(service.cycle_status(date(2024, 1, 6), &config).mode, CycleMode::Rest);
        assert_eq!(service.cycle_status(date(2024, 1, 7), &config).mode, CycleMode::Normal);

        // PMS spans days 23..=30.
        assert_eq!(service.cycle_status(date(2024, 1, 23), &config).mode, CycleMode::Normal);
        let pms_start = service.cycle_status(date(2024, 1, 24), &config);
        assert_eq!(pms_start.mode, CycleMode::Pms);
        assert_eq!(pms_start.days_to_next, Some(7));
        assert_eq!(service.cycle_status(date(2024, 1, 31), &config).mode, CycleMode::Pms);

        // Past the expected next start the countdown clamps at 0.
        let late = service.cycle_status(date(2024, 2, 2), &config);
        assert_eq!(late.mode, CycleMode::Normal);
        assert_eq!(late.days_to_next, Some(0));
    }

    #[test]
    fn test_short_cycle_overlap_prefers_rest() {
        // With length <= 12 the rest and PMS windows overlap; guard order
        // makes rest win.
        let service = CycleService::new();
        let status = service.cycle_status(date(2024, 1, 5), &settings("2024-01-01", 10));
        assert_eq!(status.days_from_last, Some(4));
        assert_eq!(status.mode, CycleMode::Rest);
    }
}
