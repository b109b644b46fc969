pub mod collateral;
pub mod monthly;
pub mod symbol_monthly;

pub use collateral::*;
pub use monthly::*;
pub use symbol_monthly::*;
