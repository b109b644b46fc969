//! Folds transaction records into month-bucketed summaries.
//!
//! Accumulation goes through unordered maps; every emitted sequence is built
//! from an explicitly sorted key list so the output is deterministic.

use log::{debug, warn};
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::monthly_model::{
    CategorySeries, MonthlyAggregate, MonthlyAmount, MonthlyTableRow, TickerAmount,
};
use crate::constants::MONTHS_PER_YEAR;
use crate::portfolio::collateral::peak_collateral;
use crate::records::{Dividend, LongPosition, OptionRecord, OptionType};
use crate::utils::{MonthKey, MonthRange};

#[derive(Default)]
struct CategoryBuckets {
    by_month: HashMap<MonthKey, Decimal>,
    by_ticker: HashMap<String, Decimal>,
}

impl CategoryBuckets {
    fn add(&mut self, month: MonthKey, ticker: &str, amount: Decimal) {
        *self.by_month.entry(month).or_insert(Decimal::ZERO) += amount;
        *self
            .by_ticker
            .entry(ticker.to_string())
            .or_insert(Decimal::ZERO) += amount;
    }

    fn month(&self, month: &MonthKey) -> Decimal {
        self.by_month.get(month).copied().unwrap_or(Decimal::ZERO)
    }

    fn to_series(&self, months: &[MonthKey]) -> CategorySeries {
        let by_month = monthly_series(months, |month| self.month(month));

        let mut by_ticker: Vec<TickerAmount> = self
            .by_ticker
            .iter()
            .filter(|(_, amount)| !amount.is_zero())
            .map(|(ticker, amount)| TickerAmount {
                ticker: ticker.clone(),
                amount: *amount,
            })
            .collect();
        by_ticker.sort_by(|a, b| a.ticker.cmp(&b.ticker));

        CategorySeries {
            by_month,
            by_ticker,
        }
    }
}

#[derive(Default)]
struct MonthlyAccumulator {
    puts: CategoryBuckets,
    calls: CategoryBuckets,
    capital_gains: CategoryBuckets,
    dividends: CategoryBuckets,
    // ticker -> month -> amount
    matrix: HashMap<String, BTreeMap<MonthKey, Decimal>>,
    months: BTreeSet<MonthKey>,
}

impl MonthlyAccumulator {
    fn add_to_matrix(&mut self, month: MonthKey, ticker: &str, amount: Decimal) {
        self.months.insert(month);
        *self
            .matrix
            .entry(ticker.to_string())
            .or_default()
            .entry(month)
            .or_insert(Decimal::ZERO) += amount;
    }

    fn add_option(&mut self, option: &OptionRecord, month: MonthKey) {
        let profit = option.total_profit();
        match option.option_type {
            OptionType::Put => self.puts.add(month, &option.symbol, profit),
            OptionType::Call => self.calls.add(month, &option.symbol, profit),
        }
        self.add_to_matrix(month, &option.symbol, profit);
    }

    fn add_dividend(&mut self, dividend: &Dividend, month: MonthKey) {
        self.dividends.add(month, &dividend.symbol, dividend.amount);
        self.add_to_matrix(month, &dividend.symbol, dividend.amount);
    }

    fn add_capital_gain(&mut self, position: &LongPosition, month: MonthKey, gain: Decimal) {
        self.capital_gains.add(month, &position.symbol, gain);
        self.add_to_matrix(month, &position.symbol, gain);
    }

    fn table_rows(&self) -> Vec<MonthlyTableRow> {
        let mut rows: Vec<MonthlyTableRow> = self
            .matrix
            .iter()
            .map(|(ticker, month_values)| MonthlyTableRow {
                ticker: ticker.clone(),
                total: month_values.values().copied().sum(),
                month_values: month_values.clone(),
            })
            .filter(|row| !row.total.is_zero())
            .collect();
        rows.sort_by(|a, b| a.ticker.cmp(&b.ticker));
        rows
    }

    fn column_totals(&self) -> BTreeMap<MonthKey, Decimal> {
        let mut totals = BTreeMap::new();
        for month_values in self.matrix.values() {
            for (month, amount) in month_values {
                *totals.entry(*month).or_insert(Decimal::ZERO) += *amount;
            }
        }
        totals
    }
}

fn monthly_series<F>(months: &[MonthKey], amount_for: F) -> Vec<MonthlyAmount>
where
    F: Fn(&MonthKey) -> Decimal,
{
    months
        .iter()
        .map(|month| MonthlyAmount {
            month: *month,
            amount: amount_for(month),
        })
        .collect()
}

/// Annualized premium return on collateral, in percent.
///
/// `premium / collateral * 12 * 100`, or exactly zero when there is no
/// collateral to measure against.
pub fn annualized_return(premium: Decimal, collateral: Decimal) -> Decimal {
    if collateral <= Decimal::zero() {
        return Decimal::ZERO;
    }
    let factor = Decimal::from(MONTHS_PER_YEAR) * Decimal::ONE_HUNDRED;
    match premium
        .checked_div(collateral)
        .and_then(|ratio| ratio.checked_mul(factor))
    {
        Some(apr) => apr,
        None => {
            warn!(
                "APR overflow for premium {} on collateral {}, reporting 0",
                premium, collateral
            );
            Decimal::ZERO
        }
    }
}

/// Builds the monthly view for every record that falls in `range`.
///
/// Options are attributed to their open month, dividends to the month they
/// were received and long positions to the month they were closed. Open
/// long positions produce no gains but still count towards collateral, so
/// `long_positions` should contain every position.
pub fn build_monthly_aggregate(
    symbols: &[String],
    options: &[OptionRecord],
    dividends: &[Dividend],
    long_positions: &[LongPosition],
    range: &MonthRange,
) -> MonthlyAggregate {
    let mut acc = MonthlyAccumulator::default();

    for option in options {
        let month = MonthKey::from_date(option.opened);
        if range.contains(&month) {
            acc.add_option(option, month);
        }
    }

    for dividend in dividends {
        let month = MonthKey::from_date(dividend.received);
        if range.contains(&month) {
            acc.add_dividend(dividend, month);
        }
    }

    for position in long_positions {
        let (Some(closed), Some(gain)) = (position.closed, position.realized_gain()) else {
            continue;
        };
        let month = MonthKey::from_date(closed);
        if range.contains(&month) {
            acc.add_capital_gain(position, month, gain);
        }
    }

    let months: Vec<MonthKey> = acc.months.iter().copied().collect();
    let month_labels = months.iter().map(MonthKey::label).collect();

    let totals_by_month = monthly_series(&months, |month| {
        acc.puts.month(month)
            + acc.calls.month(month)
            + acc.capital_gains.month(month)
            + acc.dividends.month(month)
    });

    let mut collateral_by_month = Vec::with_capacity(months.len());
    let mut apr_by_month = Vec::with_capacity(months.len());
    for month in &months {
        let collateral = peak_collateral(month, options, long_positions);
        let premium = acc.puts.month(month) + acc.calls.month(month);
        collateral_by_month.push(MonthlyAmount {
            month: *month,
            amount: collateral,
        });
        apr_by_month.push(MonthlyAmount {
            month: *month,
            amount: annualized_return(premium, collateral),
        });
    }

    let table_totals_by_month = acc.column_totals();
    let grand_total = table_totals_by_month.values().copied().sum();

    debug!(
        "Monthly aggregate built: {} months, {} tickers, grand total {}",
        months.len(),
        acc.matrix.len(),
        grand_total
    );

    MonthlyAggregate {
        symbols: symbols.to_vec(),
        range: *range,
        puts: acc.puts.to_series(&months),
        calls: acc.calls.to_series(&months),
        capital_gains: acc.capital_gains.to_series(&months),
        dividends: acc.dividends.to_series(&months),
        table_rows: acc.table_rows(),
        table_totals_by_month,
        months,
        month_labels,
        totals_by_month,
        collateral_by_month,
        apr_by_month,
        grand_total,
    }
}
