use chrono::{Local, NaiveDate};
use log::{debug, error};
use std::sync::Arc;

use super::monthly_calculator::build_monthly_aggregate;
use super::monthly_model::MonthlyAggregate;
use crate::constants::DEFAULT_WINDOW_MONTHS;
use crate::errors::Result;
use crate::portfolio::symbol_monthly::{build_symbol_monthly, SymbolMonthlyResult};
use crate::records::RecordRepositoryTrait;
use crate::settings::ConfigServiceTrait;
use crate::utils::MonthRange;

pub trait MonthlyServiceTrait: Send + Sync {
    /// Monthly view for `from..=to` (`YYYY-MM`), defaulting to the trailing
    /// window ending at the current month when either bound is missing.
    fn get_monthly_aggregate(&self, from: Option<&str>, to: Option<&str>)
        -> Result<MonthlyAggregate>;

    /// Same as [`get_monthly_aggregate`](Self::get_monthly_aggregate) with
    /// an explicit current date.
    fn get_monthly_aggregate_as_of(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
    ) -> Result<MonthlyAggregate>;

    /// Twelve calendar-month buckets of one ticker's option income.
    fn get_symbol_monthly(&self, symbol: &str) -> Result<Vec<SymbolMonthlyResult>>;
}

pub struct MonthlyService {
    record_repository: Arc<dyn RecordRepositoryTrait>,
    config_service: Arc<dyn ConfigServiceTrait>,
}

impl MonthlyService {
    pub fn new(
        record_repository: Arc<dyn RecordRepositoryTrait>,
        config_service: Arc<dyn ConfigServiceTrait>,
    ) -> Self {
        MonthlyService {
            record_repository,
            config_service,
        }
    }

    fn window_months(&self) -> u32 {
        match self.config_service.monthly_settings() {
            Ok(settings) => settings.default_window_months,
            Err(e) => {
                error!("Error reading monthly settings: {:?}", e);
                DEFAULT_WINDOW_MONTHS
            }
        }
    }
}

/// Unwraps a repository listing, substituting an empty list on failure.
fn or_empty<T>(result: Result<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            error!("Error getting {}: {:?}", what, e);
            Vec::new()
        }
    }
}

impl MonthlyServiceTrait for MonthlyService {
    fn get_monthly_aggregate(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<MonthlyAggregate> {
        self.get_monthly_aggregate_as_of(from, to, Local::now().date_naive())
    }

    fn get_monthly_aggregate_as_of(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
    ) -> Result<MonthlyAggregate> {
        let range = MonthRange::resolve(from, to, today, self.window_months())?;
        debug!("Getting monthly aggregate for {:?}..{:?}", range.from, range.to);

        let symbols = or_empty(self.record_repository.get_distinct_symbols(), "symbols");
        let options = or_empty(self.record_repository.list_options(), "options");
        let dividends = or_empty(self.record_repository.list_dividends(), "dividends");
        let long_positions = or_empty(
            self.record_repository.list_long_positions(),
            "long positions",
        );

        let aggregate =
            build_monthly_aggregate(&symbols, &options, &dividends, &long_positions, &range);
        if aggregate.is_empty() {
            debug!("No records in {:?}..{:?}", range.from, range.to);
        }
        Ok(aggregate)
    }

    fn get_symbol_monthly(&self, symbol: &str) -> Result<Vec<SymbolMonthlyResult>> {
        let options: Vec<_> = or_empty(self.record_repository.list_options(), "options")
            .into_iter()
            .filter(|option| option.symbol == symbol)
            .collect();
        debug!(
            "Building monthly results for {} ({} options)",
            symbol,
            options.len()
        );
        Ok(build_symbol_monthly(&options))
    }
}
