//! Unit tests for the monthly service.

use super::*;
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::records::{Dividend, LongPosition, OptionRecord, OptionType, RecordRepositoryTrait};
use crate::settings::{ConfigSetting, ConfigServiceTrait, MonthlySettings};
use crate::utils::MonthKey;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockRecordRepository {
    options: Vec<OptionRecord>,
    dividends: Vec<Dividend>,
    long_positions: Vec<LongPosition>,
    fail: bool,
}

impl MockRecordRepository {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(DatabaseError::QueryFailed("database is locked".to_string()).into())
        } else {
            Ok(())
        }
    }
}

impl RecordRepositoryTrait for MockRecordRepository {
    fn get_distinct_symbols(&self) -> Result<Vec<String>> {
        self.check()?;
        let mut symbols: Vec<String> = self
            .options
            .iter()
            .map(|o| o.symbol.clone())
            .chain(self.dividends.iter().map(|d| d.symbol.clone()))
            .chain(self.long_positions.iter().map(|p| p.symbol.clone()))
            .collect();
        symbols.sort();
        symbols.dedup();
        Ok(symbols)
    }

    fn list_options(&self) -> Result<Vec<OptionRecord>> {
        self.check()?;
        Ok(self.options.clone())
    }

    fn list_dividends(&self) -> Result<Vec<Dividend>> {
        self.check()?;
        Ok(self.dividends.clone())
    }

    fn list_long_positions(&self) -> Result<Vec<LongPosition>> {
        self.check()?;
        Ok(self.long_positions.clone())
    }
}

struct MockConfigService {
    settings: Option<MonthlySettings>,
}

#[async_trait]
impl ConfigServiceTrait for MockConfigService {
    fn get_all(&self) -> Result<Vec<ConfigSetting>> {
        Ok(Vec::new())
    }

    fn get_value(&self, _key: &str, default: &str) -> Result<String> {
        Ok(default.to_string())
    }

    async fn set_value(&self, _key: &str, _value: &str) -> Result<ConfigSetting> {
        unimplemented!()
    }

    fn monthly_settings(&self) -> Result<MonthlySettings> {
        self.settings
            .ok_or_else(|| Error::Unexpected("settings unavailable".to_string()))
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn month(s: &str) -> MonthKey {
    s.parse().unwrap()
}

fn put(symbol: &str, opened: NaiveDate, premium: Decimal) -> OptionRecord {
    OptionRecord {
        id: 0,
        symbol: symbol.to_string(),
        option_type: OptionType::Put,
        opened,
        closed: None,
        strike: dec!(50),
        expiration: opened + chrono::Duration::days(30),
        premium,
        contracts: 1,
        exit_price: None,
        commission: Decimal::ZERO,
    }
}

fn service(records: MockRecordRepository, settings: Option<MonthlySettings>) -> MonthlyService {
    MonthlyService::new(
        Arc::new(records),
        Arc::new(MockConfigService { settings }),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_default_window_is_trailing_twelve_months() {
    let records = MockRecordRepository {
        options: vec![
            put("XYZ", date(2023, 3, 31), dec!(1)),
            put("XYZ", date(2023, 4, 1), dec!(10)),
            put("XYZ", date(2024, 3, 10), dec!(100)),
        ],
        ..Default::default()
    };
    let service = service(records, Some(MonthlySettings::default()));

    let aggregate = service
        .get_monthly_aggregate_as_of(None, None, date(2024, 3, 15))
        .unwrap();

    assert_eq!(aggregate.range.from, Some(month("2023-04")));
    assert_eq!(aggregate.range.to, Some(month("2024-03")));
    assert_eq!(aggregate.months, vec![month("2023-04"), month("2024-03")]);
    assert_eq!(aggregate.grand_total, dec!(110));
    assert_eq!(aggregate.symbols, vec!["XYZ".to_string()]);
}

#[test]
fn test_configured_window_length_is_used() {
    let service = service(
        MockRecordRepository::default(),
        Some(MonthlySettings {
            default_window_months: 3,
        }),
    );

    let aggregate = service
        .get_monthly_aggregate_as_of(Some("2024-01"), None, date(2024, 3, 15))
        .unwrap();

    assert_eq!(aggregate.range.from, Some(month("2024-01")));
    assert_eq!(aggregate.range.to, Some(month("2024-03")));
}

#[test]
fn test_settings_failure_falls_back_to_default_window() {
    let service = service(MockRecordRepository::default(), None);

    let aggregate = service
        .get_monthly_aggregate_as_of(None, None, date(2024, 3, 15))
        .unwrap();

    assert_eq!(aggregate.range.from, Some(month("2023-04")));
}

#[test]
fn test_explicit_range_is_applied() {
    let records = MockRecordRepository {
        options: vec![
            put("XYZ", date(2022, 5, 3), dec!(40)),
            put("XYZ", date(2024, 3, 10), dec!(100)),
        ],
        ..Default::default()
    };
    let service = service(records, Some(MonthlySettings::default()));

    let aggregate = service
        .get_monthly_aggregate_as_of(Some("2022-01"), Some("2022-12"), date(2024, 3, 15))
        .unwrap();

    assert_eq!(aggregate.months, vec![month("2022-05")]);
    assert_eq!(aggregate.grand_total, dec!(40));
}

#[test]
fn test_malformed_bound_is_a_validation_error() {
    let service = service(MockRecordRepository::default(), Some(MonthlySettings::default()));

    let result = service.get_monthly_aggregate_as_of(Some("2024-1"), Some("2024-06"), date(2024, 3, 15));

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidMonthKey(_)))
    ));
}

#[test]
fn test_repository_failure_yields_empty_aggregate() {
    let service = service(MockRecordRepository::failing(), Some(MonthlySettings::default()));

    let aggregate = service
        .get_monthly_aggregate_as_of(None, None, date(2024, 3, 15))
        .unwrap();

    assert!(aggregate.is_empty());
    assert!(aggregate.symbols.is_empty());
    assert_eq!(aggregate.grand_total, Decimal::ZERO);
}

#[test]
fn test_get_monthly_aggregate_uses_current_date() {
    let service = service(MockRecordRepository::default(), Some(MonthlySettings::default()));

    let aggregate = service.get_monthly_aggregate(None, None).unwrap();

    assert!(aggregate.range.from.is_some());
    assert!(aggregate.range.to.is_some());
    assert!(aggregate.range.from < aggregate.range.to);
}

#[test]
fn test_symbol_monthly_filters_by_symbol() {
    let records = MockRecordRepository {
        options: vec![
            put("XYZ", date(2023, 3, 2), dec!(100)),
            put("XYZ", date(2024, 3, 2), dec!(50)),
            put("ABC", date(2024, 3, 2), dec!(999)),
        ],
        ..Default::default()
    };
    let service = service(records, Some(MonthlySettings::default()));

    let results = service.get_symbol_monthly("XYZ").unwrap();

    assert_eq!(results.len(), 12);
    assert_eq!(results[2].puts_count, 2);
    assert_eq!(results[2].total, dec!(150));
}

#[test]
fn test_symbol_monthly_repository_failure_yields_empty_buckets() {
    let service = service(MockRecordRepository::failing(), Some(MonthlySettings::default()));

    let results = service.get_symbol_monthly("XYZ").unwrap();

    assert_eq!(results.len(), 12);
    assert!(results.iter().all(|r| r.is_empty()));
}
