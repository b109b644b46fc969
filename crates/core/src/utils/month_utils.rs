//! Month keys and month windows.
//!
//! Every record is bucketed by the calendar month it is attributed to. A
//! [`MonthKey`] renders as a zero-padded `YYYY-MM` string, so ordering keys
//! is the same as ordering their string forms, which is chronological.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{Error, Result, ValidationError};

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    /// Month that contains `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        // Day 1 exists for every month chrono can represent.
        MonthKey(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// First calendar day of the month (inclusive lower bound).
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// The following month. Saturates at the last representable month.
    pub fn succ(&self) -> MonthKey {
        self.0
            .checked_add_months(Months::new(1))
            .map(MonthKey)
            .unwrap_or(*self)
    }

    /// The month `count` months earlier. Saturates at the first representable month.
    pub fn minus_months(&self, count: u32) -> MonthKey {
        self.0
            .checked_sub_months(Months::new(count))
            .map(MonthKey)
            .unwrap_or(*self)
    }

    /// First day of the following month (exclusive upper bound).
    ///
    /// Falls back to `NaiveDate::MAX` for the last representable month so the
    /// half-open interval still covers it.
    pub fn end_exclusive(&self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Column header label, e.g. `"2025 Jan"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.year(), self.0.format("%b"))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Validation(ValidationError::InvalidMonthKey(s.to_string()));

        let trimmed = s.trim();
        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(MonthKey)
            .ok_or_else(invalid)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// True if `from <= key <= to`. A missing bound is unbounded on that side.
pub fn in_range(key: &MonthKey, from: Option<&MonthKey>, to: Option<&MonthKey>) -> bool {
    if let Some(from) = from {
        if key < from {
            return false;
        }
    }
    if let Some(to) = to {
        if key > to {
            return false;
        }
    }
    true
}

/// Inclusive window of months used to filter records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRange {
    pub from: Option<MonthKey>,
    pub to: Option<MonthKey>,
}

impl MonthRange {
    pub fn new(from: Option<MonthKey>, to: Option<MonthKey>) -> Self {
        MonthRange { from, to }
    }

    /// A range that accepts every month.
    pub fn unbounded() -> Self {
        MonthRange::default()
    }

    /// The `months` months ending with the month of `today`, inclusive.
    pub fn trailing(today: NaiveDate, months: u32) -> Self {
        let to = MonthKey::from_date(today);
        let from = to.minus_months(months.max(1) - 1);
        MonthRange {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Builds the window from optional `YYYY-MM` query values.
    ///
    /// Both bounds must be given to take effect. If either one is missing or
    /// blank the trailing window of `window_months` ending at `today` is used.
    pub fn resolve(
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
        window_months: u32,
    ) -> Result<Self> {
        let from = from.map(str::trim).filter(|s| !s.is_empty());
        let to = to.map(str::trim).filter(|s| !s.is_empty());

        match (from, to) {
            (Some(from), Some(to)) => Ok(MonthRange {
                from: Some(from.parse()?),
                to: Some(to.parse()?),
            }),
            _ => Ok(MonthRange::trailing(today, window_months)),
        }
    }

    pub fn contains(&self, key: &MonthKey) -> bool {
        in_range(key, self.from.as_ref(), self.to.as_ref())
    }
}
