//! Monthly performance module.
//!
//! Buckets option premium, dividends and realized capital gains by month and
//! by ticker, and pairs each month with its peak collateral and annualized
//! return.

mod monthly_calculator;
mod monthly_model;
mod monthly_service;

pub use monthly_calculator::{annualized_return, build_monthly_aggregate};
pub use monthly_model::*;
pub use monthly_service::{MonthlyService, MonthlyServiceTrait};


#[cfg(test)]
mod monthly_service_tests;
