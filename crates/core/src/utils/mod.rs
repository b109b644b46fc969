pub mod month_utils;

pub use month_utils::{in_range, MonthKey, MonthRange};
