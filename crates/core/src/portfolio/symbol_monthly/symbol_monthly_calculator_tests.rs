use super::*;
use crate::records::{OptionRecord, OptionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn option(option_type: OptionType, opened: NaiveDate, premium: Decimal) -> OptionRecord {
    OptionRecord {
        id: 0,
        symbol: "KO".to_string(),
        option_type,
        opened,
        closed: None,
        strike: dec!(60),
        expiration: opened,
        premium,
        contracts: 1,
        exit_price: None,
        commission: Decimal::ZERO,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_empty_input_yields_twelve_empty_months_in_order() {
    let results = build_symbol_monthly(&[]);

    assert_eq!(results.len(), 12);
    assert_eq!(results[0].month, "January");
    assert_eq!(results[11].month, "December");
    assert!(results.iter().all(SymbolMonthlyResult::is_empty));
}

#[test]
fn test_same_month_different_years_fold_together() {
    let options = vec![
        option(OptionType::Put, date(2023, 3, 2), dec!(120)),
        option(OptionType::Put, date(2024, 3, 28), dec!(80)),
        option(OptionType::Call, date(2022, 3, 15), dec!(45.5)),
    ];

    let results = build_symbol_monthly(&options);
    let march = &results[2];

    assert_eq!(march.month, "March");
    assert_eq!(march.puts_count, 2);
    assert_eq!(march.calls_count, 1);
    assert_eq!(march.puts_total, dec!(200));
    assert_eq!(march.calls_total, dec!(45.5));
    assert_eq!(march.total, dec!(245.5));

    let others_empty = results
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 2)
        .all(|(_, r)| r.is_empty());
    assert!(others_empty);
}

#[test]
fn test_losses_reduce_bucket_total() {
    let mut losing = option(OptionType::Call, date(2024, 12, 1), dec!(50));
    losing.exit_price = Some(dec!(1.25));

    let results = build_symbol_monthly(&[losing]);
    let december = &results[11];

    assert_eq!(december.calls_count, 1);
    assert_eq!(december.calls_total, dec!(-75));
    assert_eq!(december.total, dec!(-75));
    assert!(!december.is_empty());
}
