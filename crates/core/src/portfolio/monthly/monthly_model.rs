use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::{MonthKey, MonthRange};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAmount {
    pub month: MonthKey,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerAmount {
    pub ticker: String,
    pub amount: Decimal,
}

/// One income category broken down by month and by ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySeries {
    /// One entry per reported month, zero-filled.
    pub by_month: Vec<MonthlyAmount>,
    /// Tickers with a non-zero amount, sorted by ticker.
    pub by_ticker: Vec<TickerAmount>,
}

impl CategorySeries {
    pub fn total(&self) -> Decimal {
        self.by_month.iter().map(|m| m.amount).sum()
    }
}

/// A row of the ticker x month table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTableRow {
    pub ticker: String,
    pub total: Decimal,
    /// Only months where the ticker had activity.
    pub month_values: BTreeMap<MonthKey, Decimal>,
}

/// Month-bucketed income, collateral and return figures for a window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    pub symbols: Vec<String>,
    pub range: MonthRange,

    pub puts: CategorySeries,
    pub calls: CategorySeries,
    pub capital_gains: CategorySeries,
    pub dividends: CategorySeries,

    /// Months with at least one record in range, ascending.
    pub months: Vec<MonthKey>,
    /// Display labels for `months`, e.g. `"2025 Jan"`.
    pub month_labels: Vec<String>,

    pub table_rows: Vec<MonthlyTableRow>,
    pub table_totals_by_month: BTreeMap<MonthKey, Decimal>,

    /// Puts + calls + capital gains + dividends per month.
    pub totals_by_month: Vec<MonthlyAmount>,
    /// Peak simultaneous collateral per month.
    pub collateral_by_month: Vec<MonthlyAmount>,
    /// Annualized option premium return on peak collateral, in percent.
    pub apr_by_month: Vec<MonthlyAmount>,

    pub grand_total: Decimal,
}

impl MonthlyAggregate {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}
