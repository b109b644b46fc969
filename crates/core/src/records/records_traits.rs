//! Repository traits for transaction records.

use super::{Dividend, LongPosition, OptionRecord};
use crate::errors::Result;

/// Read-only source of transaction records.
///
/// Implemented by the storage layer. Records come back fully typed; the
/// analytics code performs no further validation or de-duplication.
pub trait RecordRepositoryTrait: Send + Sync {
    /// Distinct ticker symbols known to the portfolio, sorted.
    fn get_distinct_symbols(&self) -> Result<Vec<String>>;

    /// All option records, open and closed.
    fn list_options(&self) -> Result<Vec<OptionRecord>>;

    fn list_dividends(&self) -> Result<Vec<Dividend>>;

    /// All long positions, open and closed.
    ///
    /// Open positions produce no capital gains but still tie up collateral.
    fn list_long_positions(&self) -> Result<Vec<LongPosition>>;
}
