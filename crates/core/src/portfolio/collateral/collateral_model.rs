use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::MonthKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollateralSource {
    Put,
    LongPosition,
}

/// Collateral entering or leaving the book.
///
/// Variant order is the same-day application order: opens before closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollateralEventKind {
    Open,
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollateralEvent {
    pub date: NaiveDate,
    /// Positive when collateral is committed, negative when released.
    pub delta: Decimal,
    pub kind: CollateralEventKind,
    pub source: CollateralSource,
    pub symbol: String,
}

/// Everything needed to sweep one month: what was already committed at the
/// start of the month, and the in-month events in application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollateralSnapshot {
    pub month: MonthKey,
    pub initial_collateral: Decimal,
    pub events: Vec<CollateralEvent>,
}

impl CollateralSnapshot {
    /// Highest running total reached during the month.
    ///
    /// The running total saturates instead of overflowing.
    pub fn peak(&self) -> Decimal {
        let mut current = self.initial_collateral;
        let mut max_so_far = self.initial_collateral;
        for event in &self.events {
            current = current.saturating_add(event.delta);
            if current > max_so_far {
                max_so_far = current;
            }
        }
        max_so_far
    }
}
