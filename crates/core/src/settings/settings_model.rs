use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WINDOW_MONTHS;

/// One row of the key/value config table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSetting {
    pub key: String,
    pub value: String,
    pub description: String,
}

/// Typed view of the settings consumed by the monthly analytics.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySettings {
    /// Months shown when the caller gives no explicit range.
    pub default_window_months: u32,
}

impl Default for MonthlySettings {
    fn default() -> Self {
        Self {
            default_window_months: DEFAULT_WINDOW_MONTHS,
        }
    }
}
