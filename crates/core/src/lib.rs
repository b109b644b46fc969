//! Wheeler Core - monthly analytics for an options wheel portfolio.
//!
//! Turns option, dividend and long position records into month-bucketed
//! income summaries, peak collateral per month and the annualized return on
//! that collateral. The crate is storage-agnostic: records and settings come
//! in through the repository traits, which the storage layer implements.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod records;
pub mod settings;
pub mod utils;

// Re-export common types from record and portfolio modules
pub use portfolio::*;
pub use records::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
