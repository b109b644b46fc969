//! Records module - transaction models and the repository trait that supplies them.

mod records_model;
mod records_traits;


pub use records_model::{Dividend, LongPosition, OptionRecord, OptionType};
pub use records_traits::RecordRepositoryTrait;
