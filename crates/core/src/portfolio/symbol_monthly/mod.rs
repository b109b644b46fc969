mod symbol_monthly_calculator;

pub use symbol_monthly_calculator::{build_symbol_monthly, SymbolMonthlyResult};

#[cfg(test)]
mod symbol_monthly_calculator_tests;
