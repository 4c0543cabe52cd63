//! User-configured settings for the cycle mood calendar.

use serde::{Deserialize, Serialize};
use shared::CycleMode;

/// Cycle configuration as entered by the user.
///
/// All fields are optional: an unconfigured or partially-configured widget
/// must still render, so `CycleService` degrades to `Normal` mode instead of
/// rejecting incomplete settings. `last_period_start` stays a raw string
/// here; it is parsed (and tolerated when unparseable) at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CycleSettings {
    /// First day of the most recent period, as a `YYYY-MM-DD` string.
    #[serde(default)]
    pub last_period_start: Option<String>,
    /// Average cycle length in days; ignored unless positive.
    #[serde(default)]
    pub cycle_length: Option<i64>,
    /// Unconditional mode override set from the widget.
    #[serde(default)]
    pub manual_mode: Option<CycleMode>,
}
