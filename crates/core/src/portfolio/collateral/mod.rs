//! Collateral module.
//!
//! Computes the peak capital committed to puts and long stock during a
//! calendar month.

mod collateral_calculator;
mod collateral_model;

pub use collateral_calculator::{collateral_events, peak_collateral};
pub use collateral_model::*;
