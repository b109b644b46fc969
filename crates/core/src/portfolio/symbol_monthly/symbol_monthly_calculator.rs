//! Calendar-month view of one ticker's option income.
//!
//! Buckets are keyed by month name only, so activity from different years
//! folds onto the same twelve buckets and seasonal patterns show up.

use chrono::{Datelike, Month};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::{OptionRecord, OptionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMonthlyResult {
    /// Full English month name, e.g. `"January"`.
    pub month: String,
    pub puts_count: u32,
    pub calls_count: u32,
    pub puts_total: Decimal,
    pub calls_total: Decimal,
    pub total: Decimal,
}

impl SymbolMonthlyResult {
    fn empty(month: Month) -> Self {
        SymbolMonthlyResult {
            month: month.name().to_string(),
            puts_count: 0,
            calls_count: 0,
            puts_total: Decimal::ZERO,
            calls_total: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.puts_count == 0 && self.calls_count == 0 && self.total.is_zero()
    }
}

/// Twelve buckets, January through December, always all present.
pub fn build_symbol_monthly(options: &[OptionRecord]) -> Vec<SymbolMonthlyResult> {
    let mut results: Vec<SymbolMonthlyResult> =
        std::iter::successors(Some(Month::January), |month| Some(month.succ()))
            .take(12)
            .map(SymbolMonthlyResult::empty)
            .collect();

    for option in options {
        let bucket = &mut results[option.opened.month0() as usize];
        let profit = option.total_profit();
        match option.option_type {
            OptionType::Put => {
                bucket.puts_count += 1;
                bucket.puts_total += profit;
            }
            OptionType::Call => {
                bucket.calls_count += 1;
                bucket.calls_total += profit;
            }
        }
        bucket.total = bucket.puts_total + bucket.calls_total;
    }

    results
}
