//! Peak simultaneous collateral for a calendar month.
//!
//! Every put and every long position is an interval `[opened, closed)`, or
//! `[opened, ∞)` while still open. Positions already active when the month
//! starts seed the running total; positions opening or closing inside the
//! month become events. Sweeping the events in date order gives the highest
//! amount of capital committed at any one time during the month.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::collateral_model::{
    CollateralEvent, CollateralEventKind, CollateralSnapshot, CollateralSource,
};
use crate::records::{LongPosition, OptionRecord};
use crate::utils::MonthKey;

struct CollateralInterval<'a> {
    source: CollateralSource,
    symbol: &'a str,
    opened: NaiveDate,
    closed: Option<NaiveDate>,
    amount: Decimal,
}

fn intervals<'a>(
    options: &'a [OptionRecord],
    long_positions: &'a [LongPosition],
) -> impl Iterator<Item = CollateralInterval<'a>> {
    let puts = options
        .iter()
        .filter(|option| option.is_put())
        .map(|option| CollateralInterval {
            source: CollateralSource::Put,
            symbol: &option.symbol,
            opened: option.opened,
            closed: option.closed,
            amount: option.collateral(),
        });

    let longs = long_positions.iter().map(|position| CollateralInterval {
        source: CollateralSource::LongPosition,
        symbol: &position.symbol,
        opened: position.opened,
        closed: position.closed,
        amount: position.cost_basis(),
    });

    puts.chain(longs)
}

/// Initial collateral and ordered in-month events for `month`.
///
/// Events are ordered by date; on the same date opens are applied before
/// closes, otherwise emission order (puts, then long positions) is kept.
pub fn collateral_events(
    month: &MonthKey,
    options: &[OptionRecord],
    long_positions: &[LongPosition],
) -> CollateralSnapshot {
    let month_start = month.first_day();
    let month_end = month.end_exclusive();

    let mut initial_collateral = Decimal::ZERO;
    let mut events = Vec::new();

    for interval in intervals(options, long_positions) {
        if interval.opened >= month_end {
            continue;
        }
        if matches!(interval.closed, Some(closed) if closed < month_start) {
            continue;
        }

        let event = |date: NaiveDate, kind: CollateralEventKind| CollateralEvent {
            date,
            delta: match kind {
                CollateralEventKind::Open => interval.amount,
                CollateralEventKind::Close => -interval.amount,
            },
            kind,
            source: interval.source,
            symbol: interval.symbol.to_string(),
        };

        if interval.opened < month_start {
            initial_collateral = initial_collateral.saturating_add(interval.amount);
        } else {
            events.push(event(interval.opened, CollateralEventKind::Open));
        }

        if let Some(closed) = interval.closed.filter(|closed| *closed < month_end) {
            events.push(event(closed, CollateralEventKind::Close));
        }
    }

    // sort_by_key is stable, so ties keep emission order.
    events.sort_by_key(|event| (event.date, event.kind));

    CollateralSnapshot {
        month: *month,
        initial_collateral,
        events,
    }
}

/// Peak simultaneous collateral (puts plus long cost basis) during `month`.
pub fn peak_collateral(
    month: &MonthKey,
    options: &[OptionRecord],
    long_positions: &[LongPosition],
) -> Decimal {
    let snapshot = collateral_events(month, options, long_positions);
    let peak = snapshot.peak();
    debug!(
        "Collateral for {}: initial={}, events={}, peak={}",
        month,
        snapshot.initial_collateral,
        snapshot.events.len(),
        peak
    );
    peak
}
