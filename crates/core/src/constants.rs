/// Shares controlled by one equity option contract
pub const CONTRACT_MULTIPLIER: u32 = 100;

/// Factor used to annualize a monthly return
pub const MONTHS_PER_YEAR: u32 = 12;

/// Length of the monthly view window when the caller gives no bounds
pub const DEFAULT_WINDOW_MONTHS: u32 = 12;

/// Config key holding the default monthly window length
pub const MONTHLY_WINDOW_SETTING_KEY: &str = "monthly_default_window_months";
